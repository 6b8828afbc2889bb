mod cli;
mod commands;
mod observability;
mod output;

use anyhow::{Context, Result};
use buildpulse_config::loader::load_config;
use clap::Parser;

use cli::{Cli, Commands};
use output::print_error;

fn main() {
    if let Err(e) = run() {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let format = cli.format.unwrap_or_default();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    observability::init_tracing_with_level(&config.logging.level);

    match &cli.command {
        Commands::Fire(args) => commands::fire::fire(config, args, format)?,
        Commands::Config => commands::config::show(&config, format)?,
    }

    Ok(())
}
