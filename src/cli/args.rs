//! Command-line surface.

use clap::{Args, Parser, Subcommand};

use crate::domain::entities::VisitType;

/// Paginated reports over short URLs and their visits.
#[derive(Debug, Parser)]
#[command(name = "link-reports")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level command groups.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Short URL listings
    ShortUrl {
        #[command(subcommand)]
        action: ShortUrlAction,
    },

    /// Visit listings
    Visits {
        #[command(subcommand)]
        action: VisitsAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ShortUrlAction {
    /// List short URLs page by page
    List(ListShortUrlsArgs),
}

#[derive(Debug, Args)]
pub struct ListShortUrlsArgs {
    /// The first page to list; values below 1 start at the first page
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Whether to display the tags or not
    #[arg(short = 't', long)]
    pub show_tags: bool,

    #[command(flatten)]
    pub dates: DateRangeArgs,
}

/// Optional date bounds shared by every listing.
#[derive(Debug, Args, Default)]
pub struct DateRangeArgs {
    /// Only include records from this date on (RFC 3339 or YYYY-MM-DD)
    #[arg(short = 's', long)]
    pub start_date: Option<String>,

    /// Only include records up to this date (RFC 3339 or YYYY-MM-DD)
    #[arg(short = 'e', long)]
    pub end_date: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum VisitsAction {
    /// List the visits of a short URL
    ShortUrl {
        /// Short code of the short URL
        code: String,

        /// Domain the short code belongs to (default domain if omitted)
        #[arg(short, long)]
        domain: Option<String>,

        #[command(flatten)]
        dates: DateRangeArgs,
    },

    /// List the visits of every short URL with a tag
    Tag {
        tag: String,

        #[command(flatten)]
        dates: DateRangeArgs,
    },

    /// List the visits of every short URL on a domain
    Domain {
        domain: String,

        #[command(flatten)]
        dates: DateRangeArgs,
    },

    /// List every visit that resolved to a short URL
    NonOrphan {
        #[command(flatten)]
        dates: DateRangeArgs,
    },

    /// List visits that did not resolve to any short URL
    Orphan {
        /// Only list orphan visits of this type
        #[arg(long = "type", value_parser = parse_orphan_type)]
        visit_type: Option<VisitType>,

        #[command(flatten)]
        dates: DateRangeArgs,
    },
}

fn parse_orphan_type(raw: &str) -> Result<VisitType, String> {
    let visit_type: VisitType = raw.parse()?;
    if !visit_type.is_orphan() {
        return Err(format!("'{raw}' is not an orphan visit type"));
    }
    Ok(visit_type)
}
