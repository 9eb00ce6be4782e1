//! Command-line entry point: computes the structural property table of a
//! directory of `.gr` instances.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use grprops::{driver, metrics};

#[derive(Parser)]
#[command(name = "grprops")]
#[command(about = "Computes structural graph properties of a directory of .gr instances")]
struct Cli {
    /// Directory containing the instance files; the report is written to
    /// `<dir>.csv` next to it
    instances: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let registry = metrics::registry();

    match driver::run(&cli.instances, &registry) {
        Ok(summary) => {
            info!(report = %summary.report.display(), "report written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
