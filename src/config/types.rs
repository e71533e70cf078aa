//! Core configuration types.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Contents of the config file.
///
/// Every key is optional; a missing key falls through to the environment
/// and then to the built-in default.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileConfig {
    /// Chat server host.
    pub server: Option<String>,
    /// Chat server port.
    pub port: Option<u16>,
    /// Bot login / display name.
    pub name: Option<String>,
    /// OAuth token.
    pub token: Option<String>,
    /// Channels to join.
    pub channels: Option<Vec<String>>,
    /// Verbose logging.
    pub verbose: Option<bool>,
    /// Names the bot answers to.
    pub aliases: Option<Vec<String>>,
}

/// Fully resolved bot configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Chat server host.
    pub server: String,
    /// Chat server port.
    pub port: u16,
    /// Bot login, used for NICK and its own channel.
    pub name: String,
    /// OAuth token without the `oauth:` prefix.
    pub token: String,
    /// Channels to join, without `#`.
    pub channels: Vec<String>,
    /// Verbose logging.
    pub verbose: bool,
    /// Names the bot answers to.
    pub aliases: Vec<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("token", &"<redacted>")
            .field("channels", &self.channels)
            .field("verbose", &self.verbose)
            .field("aliases", &self.aliases)
            .finish()
    }
}

/// Snapshot of `DWARFBOT_*` environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvVars {
    vars: HashMap<String, String>,
}

impl EnvVars {
    /// Prefix shared by every variable the bot reads.
    pub const PREFIX: &'static str = "DWARFBOT_";

    /// Capture the bot's variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_pairs(std::env::vars().filter(|(k, _)| k.starts_with(Self::PREFIX)))
    }

    /// Build a snapshot from explicit `(name, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up `key` (e.g. `"server"` reads `DWARFBOT_SERVER`). Empty values
    /// count as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        let name = format!("{}{}", Self::PREFIX, key.to_uppercase());
        self.vars
            .get(&name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Interpret `key` as a boolean flag.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).map(|v| {
            matches!(
                v.to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
    }
}
