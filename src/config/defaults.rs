//! Default values for configuration.

/// Twitch chat server.
pub const DEFAULT_SERVER: &str = "irc.chat.twitch.tv";

/// Plain-text IRC port on the Twitch chat server.
pub const DEFAULT_PORT: u16 = 6667;

/// Names viewers may use to address the bot (`!dwarfbot ping`).
pub const DEFAULT_ALIASES: &[&str] = &["hammerdwarfbot", "dwarfbot"];

/// Config file name, looked up in the home directory.
pub const CONFIG_FILE_NAME: &str = ".dwarfbot.toml";

pub fn default_aliases() -> Vec<String> {
    DEFAULT_ALIASES.iter().map(|a| a.to_string()).collect()
}
