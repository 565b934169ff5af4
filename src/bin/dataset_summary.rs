use clap::Parser;
use std::path::PathBuf;

use sign_dataset::{
    io_utils::{dataset_cli_error, simple_cli_error, CliError},
    load_rows, log_filter, AssetInventory, DatasetSummary,
};

/// Print statistics for an existing JSON or CSV dataset export.
#[derive(Parser)]
struct Args {
    /// Exported dataset (.json or .csv)
    input: PathBuf,
    /// Directory holding the sign asset files
    #[arg(long, default_value = sign_dataset::config::DEFAULT_ASSET_DIR)]
    assets: PathBuf,
    /// Asset file extension
    #[arg(long, default_value = sign_dataset::config::DEFAULT_EXTENSION)]
    extension: String,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter("info"))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let rows = load_rows(&args.input).map_err(|e| dataset_cli_error("reading dataset", e))?;
    if rows.is_empty() {
        return Err(simple_cli_error("dataset contains no entries"));
    }
    let inventory = AssetInventory::load(&args.assets, &args.extension)
        .map_err(|e| dataset_cli_error("loading assets", e))?;
    let summary = DatasetSummary::compute(&rows, &inventory);

    if args.json {
        let out = serde_json::to_string_pretty(&summary)
            .map_err(|e| dataset_cli_error("rendering summary", e.into()))?;
        println!("{out}");
    } else {
        summary.report();
    }
    Ok(())
}
