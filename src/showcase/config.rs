//! # Configuration
//!
//! Tuning knobs for the presentation-facing parts of the engine, loaded with
//! [`confique`] in priority order:
//!
//! 1. **Environment variables**: every `masonry` setting as
//!    `SHOWCASE_MASONRY_<KEY>` (e.g. `SHOWCASE_MASONRY_LINE_HEIGHT`), plus
//!    `SHOWCASE_DEBOUNCE_MS`
//! 2. **Config file**: a `showcase.toml` passed explicitly or found in the
//!    OS-appropriate config directory (resolved by the CLI)
//! 3. **Compiled defaults**: via `#[config(default = ...)]`
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `masonry.base_height` | `320` | Fixed card frame height |
//! | `masonry.chars_per_line` | `100` | Description characters per line |
//! | `masonry.line_height` | `24` | Height per description line |
//! | `masonry.tags_per_row` | `3` | Tag chips per row |
//! | `masonry.tag_row_height` | `32` | Height per tag row |
//! | `layout.two_columns` | `640` | Viewport width for two columns |
//! | `layout.three_columns` | `1024` | Viewport width for three columns |
//! | `layout.four_columns` | `1280` | Viewport width for four columns |
//! | `search.debounce_ms` | `300` | Quiet period before a search runs |

use crate::commands::Breakpoints;
use crate::debounce::Debouncer;
use crate::error::{Result, ShowcaseError};
use crate::height::HeightModel;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILENAME: &str = "showcase.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Milliseconds of input quiet before a search query is run
    #[config(default = 300, env = "SHOWCASE_DEBOUNCE_MS")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

impl SearchConfig {
    /// An idle debouncer using the configured quiet period.
    pub fn debouncer<T>(&self) -> Debouncer<T> {
        Debouncer::from_millis(self.debounce_ms)
    }
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ShowcaseConfig {
    #[config(nested)]
    pub masonry: HeightModel,

    #[config(nested)]
    pub layout: Breakpoints,

    #[config(nested)]
    pub search: SearchConfig,
}

impl ShowcaseConfig {
    /// Loads env overrides on top of `path` (if it exists) on top of defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ShowcaseConfig::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        let config = builder
            .load()
            .map_err(|e| ShowcaseError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.masonry
            .validate()
            .map_err(|e| ShowcaseError::Config(e.to_string()))?;

        let layout = &self.layout;
        if !(layout.two_columns <= layout.three_columns
            && layout.three_columns <= layout.four_columns)
        {
            return Err(ShowcaseError::Config(
                "layout breakpoints must be in ascending order".to_string(),
            ));
        }
        Ok(())
    }

    /// A commented sample file with every default filled in.
    pub fn template() -> String {
        confique::toml::template::<ShowcaseConfig>(confique::toml::FormatOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.masonry, HeightModel::default());
        assert_eq!(config.layout.three_columns, 1024);
        assert_eq!(config.search.debounce_ms, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);

        let config = ShowcaseConfig::load(Some(&path)).unwrap();
        assert_eq!(config.layout, Breakpoints::default());
        assert_eq!(config.masonry.chars_per_line, 100);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "[masonry]\nline_height = 30\n\n[layout]\ntwo_columns = 500\n",
        )
        .unwrap();

        let config = ShowcaseConfig::load(Some(&path)).unwrap();
        assert_eq!(config.masonry.line_height, 30);
        assert_eq!(config.masonry.tags_per_row, 3);
        assert_eq!(config.layout.two_columns, 500);
        assert_eq!(config.layout.four_columns, 1280);
    }

    #[test]
    fn test_search_delay_drives_debouncer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[search]\ndebounce_ms = 50\n").unwrap();

        let config = ShowcaseConfig::load(Some(&path)).unwrap();
        let debouncer: Debouncer<String> = config.search.debouncer();
        assert_eq!(debouncer.delay(), Duration::from_millis(50));
        assert!(!debouncer.is_pending());

        let default: Debouncer<String> = SearchConfig::default().debouncer();
        assert_eq!(default.delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_invalid_file_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[masonry]\ntags_per_row = 0\n").unwrap();

        assert!(matches!(
            ShowcaseConfig::load(Some(&path)),
            Err(ShowcaseError::Config(_))
        ));
    }

    #[test]
    fn test_unordered_breakpoints_are_rejected() {
        let config = ShowcaseConfig {
            layout: Breakpoints {
                two_columns: 1200,
                three_columns: 1024,
                four_columns: 1280,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_template_lists_settings() {
        let template = ShowcaseConfig::template();
        assert!(template.contains("chars_per_line"));
        assert!(template.contains("debounce_ms"));
        for var in [
            "SHOWCASE_MASONRY_BASE_HEIGHT",
            "SHOWCASE_MASONRY_CHARS_PER_LINE",
            "SHOWCASE_MASONRY_LINE_HEIGHT",
            "SHOWCASE_MASONRY_TAGS_PER_ROW",
            "SHOWCASE_MASONRY_TAG_ROW_HEIGHT",
        ] {
            assert!(template.contains(var), "template should mention {}", var);
        }
    }
}
