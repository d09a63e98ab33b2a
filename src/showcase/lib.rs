//! # Showcase Architecture
//!
//! Showcase is the **data engine behind a project portfolio**: it filters,
//! sorts and facets a catalog of project records and lays the results out as
//! a balanced masonry grid. It is a library that happens to have a CLI
//! client; a web front end or any other UI can drive the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards and grids as text        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the record collection and configuration             │
//! │  - Validates raw queries, memoizes facets                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine Layer (commands/*.rs, height.rs)                    │
//! │  - Pure functions over borrowed records                     │
//! │  - No I/O, no clock, no viewport                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (store/)                                      │
//! │  - CatalogSource trait: JSON file, in-memory, sample data   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Lives With the Caller
//!
//! The engine keeps no state between calls. Current filters are a
//! [`commands::FilterQuery`] value the UI owns and re-submits on every change;
//! the column count (or viewport width) is always an explicit argument.
//! Search-as-you-type coalescing is done at the call site with
//! [`debounce::Debouncer`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Filtering, facets and masonry distribution
//! - [`height`]: Card height estimation shared by the distributor
//! - [`store`]: Catalog sources
//! - [`model`]: Core data types (`ProjectRecord`, `ProjectStatus`, `ProjectImage`)
//! - [`config`]: Configuration loading
//! - [`debounce`]: Clock-injected call debouncing
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod error;
pub mod height;
pub mod model;
pub mod store;
