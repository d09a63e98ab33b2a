//! # Engine Layer
//!
//! The pure catalog operations. Every function here takes borrowed records
//! and returns newly built views over them:
//!
//! - No I/O, no logging sinks, no reading of viewport or clock state
//! - Same inputs, same outputs; safe to call from any thread
//! - Records are never mutated; results hold references into the input
//!
//! Validation of raw caller input happens before these functions run (see
//! [`filter::FilterQuery`]), so only the distributor can fail, and only on a
//! zero column count.
//!
//! ## Modules
//!
//! - [`filter`]: predicate filtering and stable sorting
//! - [`facets`]: distinct categories, tags and statuses for filter controls
//! - [`masonry`]: greedy height-balanced column assignment and viewport bucketing

pub mod facets;
pub mod filter;
pub mod masonry;

pub use facets::{derive_facets, Facets};
pub use filter::{filter_and_sort, FilterQuery, FilterSpec, SortBy, SortOrder};
pub use masonry::{
    column_count_for_width, distribute_columns, Breakpoints, Column, ColumnAssignment,
};
