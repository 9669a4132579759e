//! vibelog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(cmd, cfg),
        Commands::Db { .. } => commands::db::handle(cmd, cfg),
        Commands::Log { .. } => commands::log::handle(cmd, cfg),
        Commands::Add { .. } => commands::add::handle(cmd, cfg),
        Commands::Edit { .. } => commands::edit::handle(cmd, cfg),
        Commands::Del { .. } => commands::del::handle(cmd, cfg),
        Commands::List { .. } => commands::list::handle(cmd, cfg),
        Commands::Timer => commands::timer::handle(cmd, cfg),
        Commands::Event { .. } => commands::event::handle(cmd, cfg),
        Commands::Summary { .. } => commands::summary::handle(cmd, cfg),
        Commands::Training { .. } => commands::training::handle(cmd, cfg),
        Commands::Gear { .. } => commands::gear::handle(cmd, cfg),
        Commands::Settings { .. } => commands::settings::handle(cmd, cfg),
        Commands::Export { .. } => commands::export::handle(cmd, cfg),
        Commands::Reset { .. } => commands::reset::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; --db wins over the configured store
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
