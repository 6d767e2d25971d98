mod adapters;
mod config;
mod engine;
mod error;
mod models;

use std::io;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use adapters::record_store::FileRecordStore;
use config::AtmConfig;
use engine::runner;

/// Diagnostics go to stderr so the ATM dialogue on stdout stays clean.
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = adapters::cli::parse_cli_args();

    let config = AtmConfig::load_or_default(&args.config).with_overrides(&args);

    init_tracing(&config.log_level);
    debug!(?config, "configuration resolved");

    let store = FileRecordStore::new(&config.account_file);

    let outcome = runner::run_session(&store, io::stdin().lock(), io::stdout().lock(), &config);

    // Every outcome exits with status 0.
    info!(?outcome, "session ended");
}
