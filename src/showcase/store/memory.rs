use super::{ensure_unique_ids, CatalogSource};
use crate::error::Result;
use crate::model::ProjectRecord;

#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<ProjectRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }
}

impl CatalogSource for InMemorySource {
    fn load(&self) -> Result<Vec<ProjectRecord>> {
        ensure_unique_ids(&self.records)?;
        Ok(self.records.clone())
    }
}
