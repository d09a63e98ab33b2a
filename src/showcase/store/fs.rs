use super::{parse_catalog, CatalogSource};
use crate::error::Result;
use crate::model::ProjectRecord;
use std::fs;
use std::path::PathBuf;

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> Result<Vec<ProjectRecord>> {
        let content = fs::read_to_string(&self.path)?;
        let records = parse_catalog(&content)?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "loaded catalog");
        Ok(records)
    }
}
