//! Motion Ledger Server Entry Point

use clap::Parser;
use motion_ledger::cli::{Cli, Commands};
use motion_ledger::common::error::LedgerResult;
use motion_ledger::config::ServerConfig;
use motion_ledger::db::{self, ledger::LedgerStore, traits::LedgerRepository};
use motion_ledger::{logging, server, AppState};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let config = match cli.command {
        Some(Commands::Serve(args)) => ServerConfig::from(args),
        // No subcommand - default to serve
        None => ServerConfig::from_env(),
    };

    if let Err(e) = run_server(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: ServerConfig) -> LedgerResult<()> {
    info!("Motion Ledger v{}", env!("CARGO_PKG_VERSION"));

    let pool = db::connect(&config.db_path).await?;
    let ledger: Arc<dyn LedgerRepository> = Arc::new(LedgerStore::new(pool));
    ledger.initialize().await?;
    let entries = ledger.count().await?;
    info!(entries, "Ledger ready");

    let state = AppState::new(ledger);
    server::run(state, &config.bind_addr()).await
}
