//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// A bot to assist with https://twitch.tv/hammerdwarf and Co.
///
/// Values given here override the config file, which overrides
/// `DWARFBOT_*` environment variables.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "dwarfbot", version, about)]
pub struct Args {
    /// Server to connect to (default: irc.chat.twitch.tv)
    #[arg(short, long)]
    pub server: Option<String>,

    /// Port to connect to (default: 6667)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Channel(s) to participate in (required; repeat or comma-separate)
    #[arg(
        short = 'c',
        long = "channel",
        visible_alias = "channels",
        value_delimiter = ',',
        num_args = 1..
    )]
    pub channels: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// IRC nick to connect as
    #[arg(short, long)]
    pub name: Option<String>,

    /// OAuth token, with or without the `oauth:` prefix
    #[arg(long)]
    pub token: Option<String>,

    /// Config file (default: $HOME/.dwarfbot.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
