use clap::{Args as ClapArgs, Parser, Subcommand};
use sbom_compare::application::dto::ExportFormat;
use sbom_compare::sbom_comparison::policies::MatchKey;
use std::path::PathBuf;

/// Compare the SBOM component inventories of two applications
#[derive(Parser, Debug)]
#[command(name = "sbom-compare")]
#[command(version)]
#[command(
    about = "Compare the SBOM component inventories of two applications",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./sbom-compare.config.yml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare two inventories, record the result and print the export
    Compare(CompareArgs),
    /// List recorded comparisons, newest first
    History(HistoryArgs),
    /// Re-export a recorded comparison without re-running it
    Export(ExportArgs),
}

#[derive(ClapArgs, Debug)]
pub struct CompareArgs {
    /// Identifier of the baseline inventory
    pub app1: String,

    /// Identifier of the inventory compared against the baseline
    pub app2: String,

    /// Directory containing <inventory_id>.json files
    #[arg(short = 'd', long, value_name = "DIR")]
    pub inventory_dir: Option<PathBuf>,

    /// Directory where comparisons are recorded
    #[arg(long, value_name = "DIR")]
    pub history_dir: Option<PathBuf>,

    /// Do not record the comparison in history
    #[arg(long)]
    pub no_history: bool,

    /// Export format: json, csv or report
    #[arg(short, long)]
    pub format: Option<ExportFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Identity key used to match components: name or name-purl
    #[arg(long, value_name = "KEY")]
    pub match_key: Option<MatchKey>,

    /// Exit with code 1 when the inventories differ
    #[arg(long)]
    pub fail_on_difference: bool,
}

#[derive(ClapArgs, Debug)]
pub struct HistoryArgs {
    /// Directory where comparisons are recorded
    #[arg(long, value_name = "DIR")]
    pub history_dir: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ExportArgs {
    /// Identifier of a recorded comparison
    pub comparison_id: String,

    /// Directory where comparisons are recorded
    #[arg(long, value_name = "DIR")]
    pub history_dir: Option<PathBuf>,

    /// Export format: json, csv or report
    #[arg(short, long)]
    pub format: Option<ExportFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
