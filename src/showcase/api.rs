//! # API Facade
//!
//! [`CatalogApi`] is the single entry point a UI layer talks to. It owns the
//! loaded record collection and the configuration, and dispatches to the pure
//! functions in [`crate::commands`].
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Validates** raw [`FilterQuery`] input before the engine sees it
//! - **Memoizes facets**: they are derived once per record collection, not
//!   on every filter interaction
//! - **Applies configuration**: height model and breakpoints come from
//!   [`ShowcaseConfig`]
//!
//! ## What the API Does NOT Do
//!
//! - **Filtering or layout logic**: that belongs in `commands/*.rs`
//! - **Rendering**: results are borrowed records and column structures
//! - **Observing the viewport or clock**: widths and column counts are
//!   always passed in by the caller

use crate::commands::{self, ColumnAssignment, Facets, FilterQuery, FilterSpec};
use crate::config::ShowcaseConfig;
use crate::debounce::Debouncer;
use crate::error::{Result, ShowcaseError};
use crate::model::ProjectRecord;
use crate::store::{ensure_unique_ids, CatalogSource};

pub struct CatalogApi {
    records: Vec<ProjectRecord>,
    facets: Facets,
    config: ShowcaseConfig,
}

impl CatalogApi {
    pub fn new(records: Vec<ProjectRecord>, config: ShowcaseConfig) -> Result<Self> {
        ensure_unique_ids(&records)?;
        config.validate()?;
        let facets = commands::derive_facets(&records);
        Ok(Self {
            records,
            facets,
            config,
        })
    }

    pub fn from_source<S: CatalogSource>(source: &S, config: ShowcaseConfig) -> Result<Self> {
        Self::new(source.load()?, config)
    }

    /// Swaps in a new collection and recomputes facets.
    pub fn replace_records(&mut self, records: Vec<ProjectRecord>) -> Result<()> {
        ensure_unique_ids(&records)?;
        self.facets = commands::derive_facets(&records);
        self.records = records;
        Ok(())
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn find(&self, id: &str) -> Result<&ProjectRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| ShowcaseError::NotFound(id.to_string()))
    }

    pub fn query(&self, query: &FilterQuery) -> Result<Vec<&ProjectRecord>> {
        let spec = self.parse(query)?;
        Ok(self.filter(&spec))
    }

    pub fn filter(&self, spec: &FilterSpec) -> Vec<&ProjectRecord> {
        commands::filter_and_sort(&self.records, spec)
    }

    /// Filtered records laid out over `columns` masonry columns.
    pub fn grid(
        &self,
        query: &FilterQuery,
        columns: usize,
    ) -> Result<ColumnAssignment<'_, ProjectRecord>> {
        let matched = self.query(query)?;
        commands::distribute_columns(matched, columns, &self.config.masonry).inspect_err(|e| {
            tracing::warn!(columns, error = %e, "rejected grid request");
        })
    }

    /// Like [`CatalogApi::grid`], with the column count bucketed from a
    /// viewport width.
    pub fn grid_for_width(
        &self,
        query: &FilterQuery,
        width: u32,
    ) -> Result<ColumnAssignment<'_, ProjectRecord>> {
        let columns = commands::column_count_for_width(width, &self.config.layout);
        self.grid(query, columns)
    }

    /// Debouncer for search-as-you-type queries, using the configured delay.
    pub fn search_debouncer(&self) -> Debouncer<FilterQuery> {
        self.config.search.debouncer()
    }

    fn parse(&self, query: &FilterQuery) -> Result<FilterSpec> {
        query.parse().inspect_err(|e| {
            tracing::warn!(error = %e, "rejected filter query");
        })
    }
}
