use clap::{Args, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Split a list of items into pages")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print one page as JSON
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Page number (text is accepted and validated)
        #[arg(short, long, default_value = "1")]
        page: String,

        /// Serve page 1 instead of failing on an invalid page number
        #[arg(long)]
        show_first_page_when_invalid: bool,

        /// Fall back to page 1 on any invalid page
        #[arg(long)]
        lenient: bool,
    },
    /// Print item count and page count
    Info {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SourceArgs {
    /// File with one item per line (defaults to stdin)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Items per page (optional, defaults to PAGINATION_PER_PAGE or 12)
    #[arg(short = 'n', long)]
    pub per_page: Option<NonZeroUsize>,

    /// Trailing items folded into the previous page
    #[arg(short, long)]
    pub orphans: Option<usize>,

    /// Treat page 1 of an empty list as invalid
    #[arg(long)]
    pub no_empty_first_page: bool,
}
