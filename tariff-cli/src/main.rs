//! Tariff CLI
//!
//! Command-line front end for the Tariff service catalog.

mod commands;
mod config;
mod id_resolver;
mod types;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tariff")]
#[command(about = "Manage a catalog of services and prices", long_about = None)]
struct Cli {
    /// Directory holding the catalog (defaults to the platform data directory)
    #[arg(long, global = true, env = "TARIFF_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Keep the catalog in memory only; nothing is written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tariff_cli=info,tariff_store=warn,tariff_editor=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::resolve(cli.data_dir, cli.ephemeral)?;
    config.validate()?;

    handle_command(cli.command, &config)
}
