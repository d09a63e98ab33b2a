//! Catalog data types.
//!
//! Records are read-only inputs: the engine borrows them and derives new
//! orderings and groupings, it never mutates them. Serialized field names are
//! camelCase so catalogs exported from the web front end load unchanged.

use crate::error::ShowcaseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Completed,
        ProjectStatus::InProgress,
        ProjectStatus::Planned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Planned => "planned",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                ShowcaseError::invalid(format!(
                    "unknown status '{}' (expected completed, in-progress or planned)",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectImage {
    pub url: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
}

impl ProjectRecord {
    /// The image flagged as primary, falling back to the first image.
    pub fn primary_image(&self) -> Option<&ProjectImage> {
        self.images
            .iter()
            .find(|image| image.is_primary)
            .or_else(|| self.images.first())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Lower-cased text searched by free-text queries.
    pub fn search_haystack(&self) -> String {
        let mut parts = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.short_description.as_str(),
        ];
        if let Some(client) = &self.client {
            parts.push(client);
        }
        parts.push(&self.category);
        parts.extend(self.tags.iter().map(String::as_str));

        parts.join(" ").to_lowercase()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    /// Builds a record with sensible defaults; `day` sets `created_at` to
    /// that day of January 2024.
    pub fn record(id: &str, title: &str, category: &str, day: u32) -> ProjectRecord {
        let created_at = Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap();
        ProjectRecord {
            id: id.to_string(),
            title: title.to_string(),
            short_description: String::new(),
            description: String::new(),
            category: category.to_string(),
            tags: Vec::new(),
            client: None,
            duration: None,
            budget: None,
            status: ProjectStatus::Completed,
            featured: false,
            created_at,
            updated_at: created_at,
            images: Vec::new(),
        }
    }

    pub fn image(url: &str, is_primary: bool) -> ProjectImage {
        ProjectImage {
            url: url.to_string(),
            alt: format!("alt for {}", url),
            caption: None,
            is_primary,
        }
    }
}
