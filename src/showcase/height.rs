//! Rendered-height estimation for masonry cards.
//!
//! A card is a fixed frame (image, title, padding) plus description lines and
//! rows of tag chips. The constants are presentation tuning; only the shape
//! of the estimate matters to the distributor.

use crate::error::{Result, ShowcaseError};
use crate::model::ProjectRecord;
use confique::Config;
use serde::{Deserialize, Serialize};

/// Anything whose card height can be estimated.
pub trait Measurable {
    /// Length of the body text, in characters.
    fn text_len(&self) -> usize;
    fn tag_count(&self) -> usize;
}

impl Measurable for ProjectRecord {
    fn text_len(&self) -> usize {
        self.description.chars().count()
    }

    fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HeightModel {
    /// Fixed card frame height, in pixels
    #[config(default = 320, env = "SHOWCASE_MASONRY_BASE_HEIGHT")]
    pub base_height: u32,

    /// Characters of description per rendered line
    #[config(default = 100, env = "SHOWCASE_MASONRY_CHARS_PER_LINE")]
    pub chars_per_line: u32,

    /// Height added per description line
    #[config(default = 24, env = "SHOWCASE_MASONRY_LINE_HEIGHT")]
    pub line_height: u32,

    /// Tag chips that fit on one row
    #[config(default = 3, env = "SHOWCASE_MASONRY_TAGS_PER_ROW")]
    pub tags_per_row: u32,

    /// Height added per row of tags
    #[config(default = 32, env = "SHOWCASE_MASONRY_TAG_ROW_HEIGHT")]
    pub tag_row_height: u32,
}

impl Default for HeightModel {
    fn default() -> Self {
        Self {
            base_height: 320,
            chars_per_line: 100,
            line_height: 24,
            tags_per_row: 3,
            tag_row_height: 32,
        }
    }
}

impl HeightModel {
    pub fn validate(&self) -> Result<()> {
        if self.chars_per_line == 0 {
            return Err(ShowcaseError::invalid("chars_per_line must be positive"));
        }
        if self.tags_per_row == 0 {
            return Err(ShowcaseError::invalid("tags_per_row must be positive"));
        }
        Ok(())
    }

    /// Estimated height of `item`. A zero divisor counts as no lines.
    pub fn estimate<T: Measurable + ?Sized>(&self, item: &T) -> u32 {
        let lines = rows(item.text_len(), self.chars_per_line);
        let tag_rows = rows(item.tag_count(), self.tags_per_row);

        self.base_height
            .saturating_add(lines.saturating_mul(self.line_height))
            .saturating_add(tag_rows.saturating_mul(self.tag_row_height))
    }
}

fn rows(count: usize, per_row: u32) -> u32 {
    if per_row == 0 {
        return 0;
    }
    let rows = count.div_ceil(per_row as usize);
    u32::try_from(rows).unwrap_or(u32::MAX)
}
