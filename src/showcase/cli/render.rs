//! Text rendering of catalog results.
//!
//! Every function builds a `String` so output can be asserted in tests; the
//! handlers decide where it goes. Width math is done on display width, not
//! bytes, so accented titles line up.

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use showcase::commands::{ColumnAssignment, Facets};
use showcase::model::{ProjectRecord, ProjectStatus};
use std::fmt::Write;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const STATUS_WIDTH: usize = 12;
const FEATURED_MARKER: &str = "★";
const COLUMN_GAP: usize = 2;

fn status_label(status: ProjectStatus) -> ColoredString {
    let label = format!("{:<width$}", status.as_str(), width = STATUS_WIDTH);
    match status {
        ProjectStatus::Completed => label.green(),
        ProjectStatus::InProgress => label.yellow(),
        ProjectStatus::Planned => label.blue(),
    }
}

pub fn render_list(records: &[&ProjectRecord], now: DateTime<Utc>) -> String {
    if records.is_empty() {
        return "No projects found.\n".to_string();
    }

    let mut out = String::new();
    for record in records {
        let marker = if record.featured { FEATURED_MARKER } else { " " };
        let time_ago = format_time_ago(record.created_at, now);

        let fixed = 4 + STATUS_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let text = format!("{} · {}", record.title, record.category);
        let text = truncate_to_width(&text, available);
        let padding = available.saturating_sub(text.width());

        let _ = writeln!(
            out,
            "{} {}{} {}{:>width$}",
            marker.yellow(),
            text,
            " ".repeat(padding),
            status_label(record.status),
            time_ago.dimmed(),
            width = TIME_WIDTH
        );
    }
    out
}

/// Lines of one grid card, each at most `width` columns wide.
fn card_lines(record: &ProjectRecord, width: usize) -> Vec<String> {
    let mut lines = vec![truncate_to_width(&record.title, width).bold().to_string()];
    lines.push(truncate_to_width(&record.category, width).dimmed().to_string());
    for line in wrap(&record.short_description, width) {
        lines.push(line);
    }
    if !record.tags.is_empty() {
        let tags = record
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        for line in wrap(&tags, width) {
            lines.push(line.cyan().to_string());
        }
    }
    lines.push(String::new());
    lines
}

pub fn render_grid(grid: &ColumnAssignment<'_, ProjectRecord>) -> String {
    let count = grid.column_count().max(1);
    let width = (LINE_WIDTH.saturating_sub(COLUMN_GAP * (count - 1)) / count).max(1);

    let columns: Vec<Vec<String>> = grid
        .columns
        .iter()
        .map(|column| {
            let mut lines = vec![format!("~{}px", column.height).dimmed().to_string()];
            lines.extend(column.items.iter().flat_map(|r| card_lines(r, width)));
            lines
        })
        .collect();

    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = String::new();
    for row in 0..rows {
        let mut line = String::new();
        for (i, column) in columns.iter().enumerate() {
            let cell = column.get(row).map(String::as_str).unwrap_or("");
            line.push_str(cell);
            if i + 1 < columns.len() {
                let visible = console_width(cell);
                line.push_str(&" ".repeat(width.saturating_sub(visible) + COLUMN_GAP));
            }
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

pub fn render_facets(facets: &Facets) -> String {
    let mut out = String::new();
    let categories: Vec<&str> = facets.categories.iter().map(String::as_str).collect();
    let tags: Vec<&str> = facets.tags.iter().map(String::as_str).collect();
    let statuses: Vec<&str> = facets.statuses.iter().map(|s| s.as_str()).collect();
    for (heading, values) in [
        ("Categories", categories),
        ("Tags", tags),
        ("Statuses", statuses),
    ] {
        let _ = writeln!(out, "{}", heading.bold());
        if values.is_empty() {
            let _ = writeln!(out, "  {}", "(none)".dimmed());
        }
        for value in values {
            let _ = writeln!(out, "  {}", value);
        }
    }
    out
}

pub fn render_project(record: &ProjectRecord, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let marker = if record.featured {
        format!(" {}", FEATURED_MARKER.yellow())
    } else {
        String::new()
    };
    let _ = writeln!(out, "{}{}", record.title.bold(), marker);
    let _ = writeln!(
        out,
        "{} · {}",
        record.category,
        status_label(record.status).clear()
    );
    let _ = writeln!(out, "--------------------------------");
    let _ = writeln!(out, "{}", record.short_description.italic());
    let _ = writeln!(out);
    for line in wrap(&record.description, LINE_WIDTH) {
        let _ = writeln!(out, "{}", line);
    }
    let _ = writeln!(out);

    let details = [
        ("Client", record.client.as_deref()),
        ("Duration", record.duration.as_deref()),
        ("Budget", record.budget.as_deref()),
    ];
    for (label, value) in details {
        if let Some(value) = value {
            let _ = writeln!(out, "{:<10}{}", format!("{}:", label).dimmed(), value);
        }
    }
    if !record.tags.is_empty() {
        let _ = writeln!(out, "{:<10}{}", "Tags:".dimmed(), record.tags.join(", "));
    }
    if let Some(image) = record.primary_image() {
        let _ = writeln!(out, "{:<10}{} ({})", "Image:".dimmed(), image.url, image.alt);
    }
    let _ = writeln!(
        out,
        "{:<10}{}",
        "Added:".dimmed(),
        format_time_ago(record.created_at, now)
    );
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Greedy word wrap on display width. Words longer than `width` are truncated.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let word = truncate_to_width(word, width);
        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Display width ignoring ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\u{1b}' {
            in_escape = true;
        } else {
            width += c.width().unwrap_or(0);
        }
    }
    width
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
