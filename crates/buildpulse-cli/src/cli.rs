use std::path::PathBuf;

use buildpulse_telemetry::SecurityTrigger;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "buildpulse")]
#[command(about = "Fire authentication triggers through the buildpulse security event forwarder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (defaults to ./buildpulse.toml when present)
    #[arg(short, long, global = true, env = "BUILDPULSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fire a lifecycle trigger for a user
    Fire(FireArgs),
    /// Show the effective configuration
    Config,
}

#[derive(clap::Args)]
pub struct FireArgs {
    /// Trigger to fire
    #[arg(value_enum)]
    pub trigger: TriggerArg,
    /// Username passed to the trigger
    pub username: String,
    /// Record client calls in memory and print them instead of rendering metrics
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TriggerArg {
    Authenticated,
    FailedToAuthenticate,
    LoggedIn,
    FailedToLogIn,
    LoggedOut,
}

impl From<TriggerArg> for SecurityTrigger {
    fn from(arg: TriggerArg) -> Self {
        match arg {
            TriggerArg::Authenticated => SecurityTrigger::Authenticated,
            TriggerArg::FailedToAuthenticate => SecurityTrigger::FailedToAuthenticate,
            TriggerArg::LoggedIn => SecurityTrigger::LoggedIn,
            TriggerArg::FailedToLogIn => SecurityTrigger::FailedToLogIn,
            TriggerArg::LoggedOut => SecurityTrigger::LoggedOut,
        }
    }
}
