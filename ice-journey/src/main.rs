use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ice_journey::cli::{Cli, run};

/// Environment variable controlling log verbosity (e.g. `debug`).
const LOG_ENV: &str = "ICE_JOURNEY_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the requested output
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
