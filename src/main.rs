use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info};

use crate::input::InputError;
use crate::input::group::GroupResult;
use crate::pipeline::stage1_collect::run_stage1;
use crate::pipeline::{AggregationError, prepare_group_dataset};
use crate::report::json::write_plot_request;
use crate::report::{ReportError, build_plot_request};

mod input;
mod model;
mod pipeline;
mod report;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Benchmark group to aggregate
    group_name: String,

    /// Base directory containing per-group benchmark results
    #[arg(long, default_value = "results")]
    results_dir: PathBuf,

    /// Directory the plot dataset is written to
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let group = GroupResult::resolve(&cli.results_dir, &cli.group_name)?;
    let records = run_stage1(&group)?;
    info!(
        "collected {} task results for group {}",
        records.len(),
        cli.group_name
    );

    let dataset = prepare_group_dataset(records)?;
    let request = build_plot_request(&cli.group_name, &dataset);
    let path = write_plot_request(&request, &cli.out_dir)?;
    info!("plot dataset saved in {}", path.display());

    Ok(())
}
