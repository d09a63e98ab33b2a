//! # Catalog Sources
//!
//! The engine never assumes where records come from. A [`CatalogSource`]
//! produces the full record collection once; the API then works on it in
//! memory.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileSource`]: a JSON array of records on disk
//! - [`memory::InMemorySource`]: records handed over directly, used in tests
//!   and by embedders that fetch data themselves
//! - [`sample_catalog`]: the built-in sample catalog shipped with the crate
//!
//! ## Record Format
//!
//! ```text
//! [
//!   {
//!     "id": "harbour-bridge",
//!     "title": "...",
//!     "shortDescription": "...",
//!     "description": "...",
//!     "category": "Structural Engineering",
//!     "tags": ["Steel", "Marine"],
//!     "client": "...",            // optional
//!     "status": "in-progress",    // completed | in-progress | planned
//!     "featured": true,
//!     "createdAt": "2023-04-02T00:00:00Z",
//!     "updatedAt": "2024-01-15T00:00:00Z",
//!     "images": [{ "url": "...", "alt": "...", "isPrimary": true }]
//!   }
//! ]
//! ```

use crate::error::{Result, ShowcaseError};
use crate::model::ProjectRecord;
use std::collections::HashSet;

pub mod fs;
pub mod memory;

const SAMPLE_CATALOG: &str = include_str!("sample_catalog.json");

/// Abstract provider of the record collection.
pub trait CatalogSource {
    /// Load every record, in catalog order.
    fn load(&self) -> Result<Vec<ProjectRecord>>;
}

/// Parses a JSON catalog and checks that ids are unique.
pub fn parse_catalog(json: &str) -> Result<Vec<ProjectRecord>> {
    let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
    ensure_unique_ids(&records)?;
    Ok(records)
}

pub fn ensure_unique_ids(records: &[ProjectRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(ShowcaseError::invalid(format!(
                "duplicate project id '{}'",
                record.id
            )));
        }
    }
    Ok(())
}

/// The sample projects bundled with the crate.
pub fn sample_catalog() -> Result<Vec<ProjectRecord>> {
    parse_catalog(SAMPLE_CATALOG)
}
