//! CLI module for motion-ledger
//!
//! Provides the command-line interface for the ledger server.

pub mod serve;

use clap::{Parser, Subcommand};

/// Motion ledger - append-only, content-hashed record ledger over HTTP
#[derive(Parser, Debug)]
#[command(name = "motion-ledger")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    LEDGER_HOST             Bind address (default: 0.0.0.0)
    LEDGER_PORT             Listen port (default: 8000)
    LEDGER_DB_PATH          SQLite database file (default: ledger.db)
    LEDGER_LOG_LEVEL        Log level (default: info, falls back to RUST_LOG)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the ledger server
    Serve(serve::ServeArgs),
}
