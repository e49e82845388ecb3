use clap::{ArgAction, Args, Parser, Subcommand};
use snipcat::api::ListQuery;
use snipcat::catalog::{SortDirection, SortKey};
use snipcat::config::SnipcatConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snipcat", bin_name = "snipcat", version)]
#[command(about = "Browse, search and copy from a categorized snippet catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog export to read (defaults to $SNIPCAT_CATALOG or the configured catalog)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List items, optionally scoped, searched and sorted
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        listing: ListingArgs,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the category tree with item counts
    Tree,

    /// Show every tag with its item count
    Tags,

    /// Show items in full
    #[command(alias = "v")]
    View {
        #[command(flatten)]
        listing: ListingArgs,

        /// Indexes from the listing, or item ids
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Copy an item's content to the clipboard
    #[command(alias = "cp")]
    Copy {
        #[command(flatten)]
        listing: ListingArgs,

        /// Index from the listing, or an item id
        selector: String,

        /// Put the title and a blank line before the content
        #[arg(long)]
        with_title: bool,

        /// Write to stdout instead of the clipboard
        #[arg(long)]
        print: bool,
    },

    /// Get or set configuration
    Config {
        /// sort-by, sort-order, preview-width or catalog
        key: Option<String>,

        value: Option<String>,
    },
}

/// Flags that shape a listing. `view` and `copy` take them too, so indexes
/// resolve against the same listing the user saw.
#[derive(Args, Debug, Clone, Default)]
pub struct ListingArgs {
    /// Only items filed under this category id
    #[arg(short, long, value_name = "ID")]
    pub category: Option<String>,

    /// With --category, also include its descendant categories
    #[arg(long, requires = "category")]
    pub deep: bool,

    /// Case-insensitive text to find in titles or content
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Keep items carrying any of these tags
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// created_at, copy_count, title_number or none
    #[arg(long, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// asc or desc
    #[arg(long, value_name = "ORDER")]
    pub order: Option<SortDirection>,
}

impl ListingArgs {
    /// Builds the query, falling back to the configured order.
    pub fn into_query(self, config: &SnipcatConfig) -> ListQuery {
        let defaults = ListQuery::from_config(config);
        ListQuery {
            category_id: self.category,
            deep: self.deep,
            search_term: self.search.unwrap_or_default(),
            tags: self.tags,
            sort_key: self.sort.unwrap_or(defaults.sort_key),
            direction: self.order.unwrap_or(defaults.direction),
        }
    }
}
