use clap::{Args, Parser, Subcommand};
use showcase::commands::FilterQuery;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "showcase", bin_name = "showcase", version = get_version())]
#[command(about = "Browse, filter and lay out a project portfolio catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog JSON file (defaults to the built-in sample catalog)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Config TOML file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects matching the filters
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Lay out matching projects as a masonry grid
    Grid {
        #[command(flatten)]
        filters: FilterArgs,

        /// Number of columns
        #[arg(long, conflicts_with = "width")]
        columns: Option<usize>,

        /// Viewport width in pixels, bucketed into a column count
        #[arg(long)]
        width: Option<u32>,
    },

    /// Show the categories, tags and statuses available for filtering
    Facets,

    /// Show one project in full
    #[command(alias = "v")]
    Show {
        /// Project id
        id: String,
    },

    /// Print a sample configuration file
    Config,
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Free-text search over titles, descriptions, clients, categories and tags
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Status: completed, in-progress or planned
    #[arg(long)]
    pub status: Option<String>,

    /// Only featured projects
    #[arg(long, conflicts_with = "not_featured")]
    pub featured: bool,

    /// Only projects that are not featured
    #[arg(long)]
    pub not_featured: bool,

    /// Match projects carrying any of these tags (repeatable)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Sort key: date, title or category
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort order: asc or desc
    #[arg(long)]
    pub order: Option<String>,
}

impl FilterArgs {
    /// Raw query; values are validated by the API, not by clap.
    pub fn to_query(&self) -> FilterQuery {
        let featured = if self.featured {
            Some(true)
        } else if self.not_featured {
            Some(false)
        } else {
            None
        };

        FilterQuery {
            search: self.search.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            status: self.status.clone().unwrap_or_default(),
            featured,
            tags: self.tags.clone(),
            sort_by: self.sort.clone().unwrap_or_default(),
            sort_order: self.order.clone().unwrap_or_default(),
        }
    }
}
