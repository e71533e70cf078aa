//! dwarfbot - a Twitch chat bot.
//!
//! Joins the configured channels, answers keep-alives, and responds to
//! `!dwarfbot <command>` until the channel owner shuts it down.

mod cli;
mod config;
mod error;
mod handlers;
mod session;
mod telemetry;

use clap::Parser;
use tracing::info;

use crate::cli::Args;
use crate::config::Config;
use crate::session::Session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (config, config_path) = Config::load(&args)?;

    telemetry::init(config.verbose);

    match &config_path {
        Some(path) => info!(path = %path.display(), "Using config file"),
        None => info!("No config file, using flags and environment"),
    }

    let mut session = Session::new(&config);
    session.run().await?;

    info!(
        state = %session.state(),
        reconnects = session.reconnect_count(),
        "Goodbye"
    );
    Ok(())
}
