//! pressrate library root.
//! Exposes the CLI parser, the high-level run() function, the HTTP router
//! and the store/estimator modules they share.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod server;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::{EnvFilter, fmt};

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg).await,
        Commands::Press { .. } => cli::commands::press::handle(&cli.command, cfg).await,
        Commands::Dump { .. } => cli::commands::dump::handle(&cli.command, cfg).await,
        Commands::Estimate { .. } => cli::commands::estimate::handle(&cli.command, cfg).await,
    }
}

/// Log to stderr so command output on stdout stays clean. `RUST_LOG`
/// overrides the default `info` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    init_tracing();

    // 1. parse CLI
    let cli = Cli::parse();

    // 2. defaults → config file → environment
    let mut cfg = Config::load(cli.config.as_deref())?;

    // 3. command-line database override wins over everything
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg).await
}
