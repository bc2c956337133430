//! siyam library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod assistant;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod schedule;
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
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(cli, cfg),
        Commands::Next { .. } => cli::commands::next::handle(cli, cfg),
        Commands::Duas => cli::commands::duas::handle(cli, cfg),
        Commands::Quote => cli::commands::quote::handle(cli, cfg),
        Commands::Ask { .. } => cli::commands::ask::handle(cli, cfg),
        Commands::Chat => cli::commands::chat::handle(cli, cfg),
        Commands::Tasbih { .. } => cli::commands::tasbih::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // parse CLI
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load();

    // apply schedule override from the command line
    if let Some(custom_schedule) = &cli.schedule {
        cfg.schedule = custom_schedule.clone();
    }

    // hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
