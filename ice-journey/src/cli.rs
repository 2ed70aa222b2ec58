//! Command-line interface.
//!
//! Parses arguments, fetches one snapshot, derives the requested view and
//! writes it to stdout. Every setting is passed down explicitly; there is
//! no global state.

use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::domain::DomainError;
use crate::portal::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MockPortalClient, PortalClient, PortalConfig,
    PortalError, SnapshotProvider,
};
use crate::progress::{JourneyViewBuilder, ProgressConfig};
use crate::render::{OutputFormat, RenderError, Tabular, select_field, write_rows};

/// Query on-train portal endpoints for live information about the train and journey.
#[derive(Debug, Parser)]
#[command(name = "ice-journey", version)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Print only this field (e.g. "NEXT STOP")
    #[arg(short, long, global = true)]
    pub filter: Option<String>,

    /// Portal API base URL
    #[arg(long, global = true, env = "ICE_PORTAL_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Serve recorded trip.json/status.json from this directory instead of the portal
    #[arg(long, global = true, env = "ICE_PORTAL_MOCK_DIR")]
    pub mock_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print train trip info
    Trip(TripArgs),
    /// Print train status info
    Status,
    /// Print version information
    Version,
}

#[derive(Debug, Args)]
pub struct TripArgs {
    /// Override for your destination (exact station name)
    #[arg(short, long, global = true)]
    pub destination: Option<String>,

    #[command(subcommand)]
    pub command: Option<TripCommand>,
}

#[derive(Debug, Subcommand)]
pub enum TripCommand {
    /// Print trip stop info
    Stops,
}

/// Errors surfaced to the user by the command line.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Portal(#[from] PortalError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the parsed command against the live portal or the mock directory.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();

    match &cli.mock_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "using mock snapshots");
            let provider = MockPortalClient::new(dir)?;
            execute(&cli, &provider, &mut out, &mut err).await
        }
        None => {
            let config = PortalConfig::new()
                .with_base_url(&cli.base_url)
                .with_timeout(cli.timeout);
            let provider = PortalClient::new(config)?;
            execute(&cli, &provider, &mut out, &mut err).await
        }
    }
}

/// Fetch, derive and write the view for `cli.command`.
///
/// Nothing is written unless the whole view could be built.
pub async fn execute<P, O, E>(
    cli: &Cli,
    provider: &P,
    out: &mut O,
    err: &mut E,
) -> Result<(), CliError>
where
    P: SnapshotProvider,
    O: Write,
    E: Write,
{
    match &cli.command {
        Command::Version => {
            writeln!(out, "ice-journey v{}", env!("CARGO_PKG_VERSION"))?;
        }
        Command::Status => {
            let status = provider.fetch_status().await?;
            write_single(cli, &status, out, err)?;
        }
        Command::Trip(args) => {
            let trip = provider.fetch_trip().await?;
            let config = ProgressConfig::new(args.destination.clone());
            let now = Utc::now();
            let builder = JourneyViewBuilder::new(&trip, &config, now)?;

            match args.command {
                None => write_single(cli, &builder.journey_view(), out, err)?,
                Some(TripCommand::Stops) => {
                    let rows = builder.stop_views();
                    match &cli.filter {
                        Some(token) => {
                            let values = select_field(&rows, token)?;
                            writeln!(out, "{}", values.join(","))?;
                        }
                        None => write_rows(out, cli.output, &rows)?,
                    }
                }
            }
        }
    }
    Ok(())
}

/// Write a one-row view, or just one of its fields.
///
/// A filtered value goes to stdout without a newline (for embedding in
/// prompts and status bars); the newline goes to stderr.
fn write_single<R, O, E>(cli: &Cli, view: &R, out: &mut O, err: &mut E) -> Result<(), CliError>
where
    R: Tabular,
    O: Write,
    E: Write,
{
    match &cli.filter {
        Some(token) => {
            let values = select_field(std::slice::from_ref(view), token)?;
            write!(out, "{}", values.concat())?;
            writeln!(err)?;
        }
        None => write_rows(out, cli.output, std::slice::from_ref(view))?,
    }
    Ok(())
}
