//! Unearth - terminal heat-map assistant for buried-item grid puzzles
//!
//! Mark the cells that are still buried, declare the item shapes you expect
//! to find, and ask the estimation service where digging is most promising.

use std::fs;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;

use unearth::client::HttpEstimateClient;
use unearth::config::Config;
use unearth::constants::{
    APP_BINARY_NAME, APP_NAME, DEFAULT_BOARD_COLS, DEFAULT_BOARD_ROWS, MAX_BOARD_COLS,
    MAX_BOARD_ROWS,
};
use unearth::services::EstimateBackend;
use unearth::tui;

/// Unearth - terminal heat-map assistant for buried-item grid puzzles
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of board rows
    #[arg(long, value_name = "ROWS")]
    rows: Option<usize>,

    /// Number of board columns
    #[arg(long, value_name = "COLS")]
    cols: Option<usize>,

    /// Estimation service endpoint, overriding the configured one
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Write a default configuration file and exit
    #[arg(short, long)]
    init: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.init {
        let config = Config::default();
        config.save()?;
        println!("{} configuration written to {}", APP_NAME, Config::config_path()?.display());
        println!("Edit it to point at your estimation service, then run {APP_BINARY_NAME}.");
        return Ok(());
    }

    // Load the config when one exists; otherwise run on defaults
    let mut config = if Config::exists() {
        Config::load()?
    } else {
        Config::default()
    };
    if let Some(endpoint) = cli.endpoint {
        config.service.endpoint = endpoint;
        config.validate()?;
    }

    let rows = cli.rows.unwrap_or(DEFAULT_BOARD_ROWS);
    let cols = cli.cols.unwrap_or(DEFAULT_BOARD_COLS);
    validate_board_size(rows, cols)?;

    init_logging()?;

    let backend: Arc<dyn EstimateBackend> = Arc::new(HttpEstimateClient::new(
        &config.service.endpoint,
        config.service.timeout(),
    )?);

    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(&config, rows, cols, backend);
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;
    result
}

/// Rejects board sizes the estimation service would refuse.
fn validate_board_size(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        anyhow::bail!("Board size {rows}x{cols} is invalid: both dimensions must be positive");
    }
    if rows > MAX_BOARD_ROWS || cols > MAX_BOARD_COLS {
        anyhow::bail!(
            "Board size {rows}x{cols} exceeds the service limit of {MAX_BOARD_ROWS}x{MAX_BOARD_COLS}"
        );
    }
    Ok(())
}

/// Sends tracing output to a log file; the terminal belongs to the TUI.
fn init_logging() -> Result<()> {
    let path = Config::log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = fs::File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("unearth=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_board_size_defaults_ok() {
        assert!(validate_board_size(DEFAULT_BOARD_ROWS, DEFAULT_BOARD_COLS).is_ok());
    }

    #[test]
    fn test_validate_board_size_limits() {
        assert!(validate_board_size(9, 9).is_ok());
        assert!(validate_board_size(10, 9).is_err());
        assert!(validate_board_size(9, 10).is_err());
        assert!(validate_board_size(0, 5).is_err());
        assert!(validate_board_size(5, 0).is_err());
    }
}
