//! Command line definition.

use clap::{Args, Parser, Subcommand, ValueEnum};
use diffmark_core::Granularity;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "diffmark")]
#[command(about = "Annotate text diffs with renderer markers", long_about = None)]
pub struct Cli {
    /// Config file to use instead of .diffmark.toml lookup
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Diff two files and print the annotated result
    Diff(DiffArgs),
    /// Format a compact YYYYMMDDHHmmss timestamp
    Time(TimeArgs),
    /// Hyperlink quoted URLs in highlighted markup
    Links(LinksArgs),
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Old file, or a JSON array of operations with --ops-json
    pub old: PathBuf,

    /// New file
    #[arg(required_unless_present = "ops_json")]
    pub new: Option<PathBuf>,

    /// Read precomputed operations from OLD instead of diffing two files
    #[arg(long, conflicts_with_all = ["new", "granularity"])]
    pub ops_json: bool,

    /// Language id passed to the renderer (defaults to the configured one)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Unit the diff is computed over
    #[arg(long, value_enum)]
    pub granularity: Option<GranularityArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Annotated)]
    pub format: OutputFormat,

    /// Also copy the output to the clipboard (on Linux this needs a running
    /// clipboard manager to outlive the process)
    #[arg(long)]
    pub copy: bool,

    /// Also export the output to this file name in the export directory
    #[arg(long, value_name = "FILE_NAME")]
    pub export: Option<String>,
}

#[derive(Debug, Args)]
pub struct TimeArgs {
    /// Timestamp in YYYYMMDDHHmmss form
    pub stamp: String,

    /// Print a relative label instead of the full date
    #[arg(short, long)]
    pub relative: bool,
}

#[derive(Debug, Args)]
pub struct LinksArgs {
    /// Markup file, or "-" for stdin
    pub input: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GranularityArg {
    Lines,
    Words,
    Chars,
}

impl From<GranularityArg> for Granularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Lines => Granularity::Lines,
            GranularityArg::Words => Granularity::Words,
            GranularityArg::Chars => Granularity::Chars,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Source with inline diff markers
    Annotated,
    /// Unified listing with +/- prefixes
    Unified,
}
