//! rDowntime library root.
//! Exposes the CLI parser, the high-level run() function, and the status
//! event log / downtime engine used by every command.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Toggle => cli::commands::toggle::handle(cfg),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, cfg),
        Commands::Check => cli::commands::check::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ diagnostics on stderr
    logging::init(&cfg.log_level);

    // 4️⃣ command-line override of the event log
    if let Some(custom) = &cli.file {
        cfg.data_file = Config::resolve_data_file(custom)
            .to_string_lossy()
            .to_string();
    }

    // 5️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
