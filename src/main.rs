use clap::Parser;
use sign_dataset::log_filter;
use std::path::PathBuf;
use std::time::Instant;

use sign_dataset::{
    build_from_config, export_all,
    io_utils::{dataset_cli_error, CliError},
    Config, DatasetSummary,
};

/// Build the ISL sign action dataset and export it as JSON, CSV and TypeScript.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Directory holding the sign asset files
    #[arg(long, default_value = sign_dataset::config::DEFAULT_ASSET_DIR)]
    assets: PathBuf,
    /// Asset file extension
    #[arg(long, default_value = sign_dataset::config::DEFAULT_EXTENSION)]
    extension: String,
    /// JSON output path
    #[arg(long, default_value = sign_dataset::config::DEFAULT_JSON_OUTPUT)]
    json_out: PathBuf,
    /// CSV output path
    #[arg(long, default_value = sign_dataset::config::DEFAULT_CSV_OUTPUT)]
    csv_out: PathBuf,
    /// TypeScript output path
    #[arg(long, default_value = sign_dataset::config::DEFAULT_TS_OUTPUT)]
    ts_out: PathBuf,
    /// Build and summarize without writing any file
    #[arg(long)]
    dry_run: bool,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config {
        asset_dir: args.assets,
        extension: args.extension,
        json_output: args.json_out,
        csv_output: args.csv_out,
        ts_output: args.ts_out,
        ..Config::default()
    };

    let start = Instant::now();
    let (rows, inventory) =
        build_from_config(&config).map_err(|e| dataset_cli_error("building dataset", e))?;
    let summary = DatasetSummary::compute(&rows, &inventory);

    if args.dry_run {
        tracing::info!("(dry run) skipping file writes");
    } else {
        export_all(&rows, &config).map_err(|e| dataset_cli_error("exporting dataset", e))?;
    }

    if args.json {
        let out = serde_json::to_string_pretty(&summary)
            .map_err(|e| dataset_cli_error("rendering summary", e.into()))?;
        println!("{out}");
    } else {
        summary.report();
    }
    tracing::info!("dataset generation complete in {:.2?}", start.elapsed());
    Ok(())
}
