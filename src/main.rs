mod cli;

use cli::{Args, Command, CompareArgs, ExportArgs, HistoryArgs};
use sbom_compare::adapters::outbound::console::StderrProgressReporter;
use sbom_compare::adapters::outbound::filesystem::{
    FileSystemHistoryStore, JsonInventoryRepository,
};
use sbom_compare::application::dto::{ComparisonRequest, ExportFormat};
use sbom_compare::application::factories::{PresenterFactory, PresenterType};
use sbom_compare::application::use_cases::CompareInventoriesUseCase;
use sbom_compare::config::{load_config, Settings};
use sbom_compare::sbom_comparison::domain::ComparisonResult;
use sbom_compare::sbom_comparison::services::ComparisonEngine;
use sbom_compare::shared::error::ExitCode;
use sbom_compare::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliUseCase =
    CompareInventoriesUseCase<JsonInventoryRepository, FileSystemHistoryStore, StderrProgressReporter>;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

/// Logs go to stderr so stdout only ever carries the export.
fn init_tracing(verbose: bool) {
    let log_level = if verbose { "warn,sbom_compare=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref(), Path::new("."))?;
    let settings = Settings::from_config(config.as_ref())?;

    match args.command {
        Command::Compare(compare) => run_compare(compare, settings).await,
        Command::History(history) => run_history(history, settings).await,
        Command::Export(export) => run_export(export, settings).await,
    }
}

fn create_use_case(inventory_dir: PathBuf, history_dir: PathBuf) -> CliUseCase {
    CompareInventoriesUseCase::new(
        JsonInventoryRepository::new(inventory_dir),
        FileSystemHistoryStore::new(history_dir),
        StderrProgressReporter::new(),
    )
}

async fn run_compare(args: CompareArgs, settings: Settings) -> Result<ExitCode> {
    let inventory_dir = args.inventory_dir.unwrap_or(settings.inventory_dir);
    let history_dir = args.history_dir.unwrap_or(settings.history_dir);
    let format = args.format.unwrap_or(settings.format);
    let match_key = args.match_key.unwrap_or(settings.match_key);
    let fail_on_difference = args.fail_on_difference || settings.fail_on_difference;

    let use_case = create_use_case(inventory_dir, history_dir)
        .with_engine(ComparisonEngine::with_match_key(match_key));

    let mut request = ComparisonRequest::new(args.app1, args.app2);
    if args.no_history {
        request = request.without_history();
    }

    let result = use_case.execute(request).await?;
    present(&use_case, &result, format, args.output)?;

    if fail_on_difference && result.summary().has_differences() {
        return Ok(ExitCode::DifferencesDetected);
    }
    Ok(ExitCode::Success)
}

async fn run_history(args: HistoryArgs, settings: Settings) -> Result<ExitCode> {
    let history_dir = args.history_dir.unwrap_or(settings.history_dir);
    let use_case = create_use_case(settings.inventory_dir, history_dir);

    let records = use_case.history().await?;
    if records.is_empty() {
        eprintln!("No comparisons recorded yet.");
        return Ok(ExitCode::Success);
    }

    let lines: String = records.iter().map(history_line).collect();
    PresenterFactory::create(PresenterType::Stdout).present(&lines)?;
    Ok(ExitCode::Success)
}

async fn run_export(args: ExportArgs, settings: Settings) -> Result<ExitCode> {
    let history_dir = args.history_dir.unwrap_or(settings.history_dir);
    let format = args.format.unwrap_or(settings.format);
    let use_case = create_use_case(settings.inventory_dir, history_dir);

    let result = use_case.find(&args.comparison_id).await?;
    present(&use_case, &result, format, args.output)?;
    Ok(ExitCode::Success)
}

fn present(
    use_case: &CliUseCase,
    result: &ComparisonResult,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let bytes = use_case.export_as(result, format)?;
    let content = String::from_utf8(bytes)?;
    PresenterFactory::create(PresenterType::from_output(output)).present(&content)
}

/// One tab-separated line per recorded comparison
fn history_line(result: &ComparisonResult) -> String {
    format!(
        "{}\t{}\t{} ({}) vs {} ({})\t{:.2}%\n",
        result.comparison_id(),
        result
            .created_at()
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        result.app1().name,
        result.app1().id,
        result.app2().name,
        result.app2().id,
        result.summary().similarity_percentage
    )
}
