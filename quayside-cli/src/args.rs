//! Command-line arguments.

use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Parser)]
#[command(name = "quayside")]
#[command(about = "Search, sort and page through container records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Also log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to config.json in the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render one page of a record file and exit
    Show(ShowArgs),

    /// Browse a record file interactively
    Browse(BrowseArgs),
}

/// Arguments shared by every command.
#[derive(Debug, Clone, Args)]
pub struct TableArgs {
    /// JSON array of records, each with an "id"
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// JSON column file (defaults to every field of the first record)
    #[arg(long, value_name = "PATH")]
    pub columns: Option<PathBuf>,

    /// Rows per page (overrides the config file)
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Free-text search
    #[arg(short, long)]
    pub query: Option<String>,

    /// Column key to sort by
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to show, 1-based
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Debug, Clone, Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub table: TableArgs,
}
