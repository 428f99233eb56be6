#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

use clap::Parser;
use motus::framework::{self, Config};
use tracing::{debug, info};

mod cli;
use cli::Cli;

mod commands;

fn main() -> anyhow::Result<()> {
    // a missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config_path())?;

    framework::logging::init_tracing(&config.logs.filter);
    info!("motus {}", env!("CARGO_PKG_VERSION"));
    debug!(?config);

    commands::run(cli.command, &config)?;

    Ok(())
}
