//! shiftcal entry point.

use std::process::ExitCode;

use shiftcal_cli::config::RunConfig;
use shiftcal_cli::error::CliResult;
use shiftcal_cli::pipeline;
use shiftcal_core::tracing::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_tracing(TracingConfig::default()) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> CliResult<()> {
    let config = RunConfig::from_env()?;
    pipeline::run(&config).await
}
