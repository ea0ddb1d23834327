pub mod cli;
pub mod core;

use crate::core::{Market, ReferenceStore, config::AppConfig};
use anyhow::Result;
use tracing::{debug, info};

/// Commands that read the reference data. `setup` is handled by the binary
/// since it must work before any config exists.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Companies {
        market: Option<Market>,
        query: Option<String>,
    },
    Company {
        ticker: String,
    },
    Slice {
        ticker: String,
        shares: String,
        json: bool,
    },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("shareslice starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let store = ReferenceStore::from_config(&config);

    match command {
        AppCommand::Companies { market, query } => {
            cli::companies::run(
                &store,
                market.unwrap_or(config.market),
                query.as_deref().unwrap_or_default(),
            );
            Ok(())
        }
        AppCommand::Company { ticker } => {
            cli::company::run(&store, &cli::normalize_ticker(&ticker))
        }
        AppCommand::Slice {
            ticker,
            shares,
            json,
        } => cli::slice::run(&store, &cli::normalize_ticker(&ticker), &shares, json),
    }
}
