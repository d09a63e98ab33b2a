//! # CLI Layer
//!
//! This module is **one possible UI client** for showcase, not the
//! application itself. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Resolves file locations (catalog, config)
//! - Formats output for human consumption
//!
//! Running `showcase` with no subcommand lists the whole catalog, newest
//! first. Filter values are passed through as raw strings; the API rejects
//! unknown sort keys, orders and statuses.

mod render;
mod setup;

use chrono::Utc;
use clap::Parser;
use directories::ProjectDirs;
use render::{render_facets, render_grid, render_list, render_project};
use setup::{Cli, Commands, FilterArgs};
use showcase::api::CatalogApi;
use showcase::config::{ShowcaseConfig, CONFIG_FILENAME};
use showcase::error::Result;
use showcase::store::fs::JsonFileSource;
use showcase::store::sample_catalog;
use std::path::PathBuf;

/// Columns that fit the fixed render width comfortably.
const DEFAULT_GRID_COLUMNS: usize = 2;

struct AppContext {
    api: CatalogApi,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Config output needs no catalog
    if let Some(Commands::Config) = &cli.command {
        print!("{}", ShowcaseConfig::template());
        return Ok(());
    }

    let ctx = init_context(&cli)?;

    match cli.command {
        None => handle_list(&ctx, &FilterArgs::default()),
        Some(Commands::List { filters }) => handle_list(&ctx, &filters),
        Some(Commands::Grid {
            filters,
            columns,
            width,
        }) => handle_grid(&ctx, &filters, columns, width),
        Some(Commands::Facets) => handle_facets(&ctx),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::Config) => Ok(()),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("SHOWCASE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "showcase").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_path = cli.config.clone().or_else(default_config_path);
    let config = ShowcaseConfig::load(config_path.as_deref())?;

    let api = match &cli.catalog {
        Some(path) => CatalogApi::from_source(&JsonFileSource::new(path), config)?,
        None => CatalogApi::new(sample_catalog()?, config)?,
    };
    tracing::debug!(records = api.records().len(), "catalog ready");

    Ok(AppContext { api })
}

fn handle_list(ctx: &AppContext, filters: &FilterArgs) -> Result<()> {
    let records = ctx.api.query(&filters.to_query())?;
    print!("{}", render_list(&records, Utc::now()));
    Ok(())
}

fn handle_grid(
    ctx: &AppContext,
    filters: &FilterArgs,
    columns: Option<usize>,
    width: Option<u32>,
) -> Result<()> {
    let query = filters.to_query();
    let grid = match (columns, width) {
        (Some(columns), _) => ctx.api.grid(&query, columns)?,
        (None, Some(width)) => ctx.api.grid_for_width(&query, width)?,
        (None, None) => ctx.api.grid(&query, DEFAULT_GRID_COLUMNS)?,
    };
    print!("{}", render_grid(&grid));
    Ok(())
}

fn handle_facets(ctx: &AppContext) -> Result<()> {
    print!("{}", render_facets(ctx.api.facets()));
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let record = ctx.api.find(id)?;
    print!("{}", render_project(record, Utc::now()));
    Ok(())
}
