//! Masonry column distribution.
//!
//! Items are placed one at a time, in input order, into whichever column is
//! currently shortest by estimated height. Equal heights resolve to the
//! lowest column index, so from an empty grid items with equal heights fill
//! strictly left to right. This is a greedy approximation of visual balance,
//! not an optimal packing.

use crate::error::{Result, ShowcaseError};
use crate::height::{HeightModel, Measurable};
use confique::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a, T> {
    pub items: Vec<&'a T>,
    /// Accumulated estimated height of `items`.
    pub height: u32,
}

impl<T> Default for Column<'_, T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            height: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAssignment<'a, T> {
    pub columns: Vec<Column<'a, T>>,
}

impl<T> ColumnAssignment<'_, T> {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn total_items(&self) -> usize {
        self.columns.iter().map(|c| c.items.len()).sum()
    }

    pub fn heights(&self) -> Vec<u32> {
        self.columns.iter().map(|c| c.height).collect()
    }

    /// Tallest column height; the grid's overall estimated height.
    pub fn max_height(&self) -> u32 {
        self.columns.iter().map(|c| c.height).max().unwrap_or(0)
    }
}

/// Distributes `items` over `column_count` columns.
///
/// Fails with `InvalidArgument` when `column_count` is zero.
pub fn distribute_columns<'a, T, I>(
    items: I,
    column_count: usize,
    model: &HeightModel,
) -> Result<ColumnAssignment<'a, T>>
where
    T: Measurable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if column_count == 0 {
        return Err(ShowcaseError::invalid("column count must be at least 1"));
    }

    let mut columns: Vec<Column<'a, T>> = (0..column_count).map(|_| Column::default()).collect();

    for item in items {
        let height = model.estimate(item);
        let target = shortest_column(&columns);
        let column = &mut columns[target];
        column.items.push(item);
        column.height = column.height.saturating_add(height);
    }

    let assignment = ColumnAssignment { columns };
    tracing::debug!(
        columns = column_count,
        items = assignment.total_items(),
        max_height = assignment.max_height(),
        "distributed masonry columns"
    );
    Ok(assignment)
}

/// Index of the shortest column, lowest index on ties.
fn shortest_column<T>(columns: &[Column<'_, T>]) -> usize {
    let mut best = 0;
    for (i, column) in columns.iter().enumerate().skip(1) {
        // strict comparison keeps the earlier column on ties
        if column.height < columns[best].height {
            best = i;
        }
    }
    best
}

/// Viewport widths (in pixels) at which the grid gains a column.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    /// Width from which two columns are used
    #[config(default = 640)]
    pub two_columns: u32,

    /// Width from which three columns are used
    #[config(default = 1024)]
    pub three_columns: u32,

    /// Width from which four columns are used
    #[config(default = 1280)]
    pub four_columns: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            two_columns: 640,
            three_columns: 1024,
            four_columns: 1280,
        }
    }
}

/// Column count for a viewport `width`. Always at least 1.
pub fn column_count_for_width(width: u32, breakpoints: &Breakpoints) -> usize {
    if width >= breakpoints.four_columns {
        4
    } else if width >= breakpoints.three_columns {
        3
    } else if width >= breakpoints.two_columns {
        2
    } else {
        1
    }
}
