//! `peddler` CLI entry-point.
//!
//! The auction-house trading loop does not exist yet: this binary resolves
//! its configuration file and then exits with a "not implemented" error.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CONFIG_FILE_NAME: &str = "peddler.toml";
const LOG_DIR: &str = "logs";
const LOG_FILE_NAME: &str = "peddler.log";

#[derive(Parser)]
#[command(
    name = "peddler",
    about = "Auction-house trading bot for the game databases",
    version
)]
struct Cli {
    /// Path to the config file; defaults to peddler.toml next to the binary.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Console plus rotating-file logging.  The returned guard flushes the file
/// writer when dropped, so `main` holds it until exit.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();
    guard
}

/// `peddler.toml` in the directory the binary itself lives in.
fn default_config_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    let dir = exe
        .parent()
        .context("executable has no parent directory")?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = init_logging();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    info!(config = %config_path.display(), "resolved configuration file");

    bail!("the auction-house trading loop is not implemented yet");
}
