//! diffmark CLI
//!
//! Diff two texts and print them with inline renderer markers.

use clap::Parser;
use diffmark_config::AppConfig;

mod cli;
mod commands;
mod logger;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let from_env = logger::init();

    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from(path),
        None => Ok(AppConfig::load()),
    };

    if let Ok(config) = &config {
        logger::apply_config_level(&config.log_level, from_env);
    }

    let result = config.and_then(|config| match cli.command {
        Commands::Diff(args) => commands::diff(args, &config),
        Commands::Time(args) => commands::time(args),
        Commands::Links(args) => commands::links(args),
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
