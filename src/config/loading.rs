//! Config file discovery and layered resolution.
//!
//! Each key resolves independently, highest priority first:
//!
//! 1. Command-line flag
//! 2. Config file (`--config`, else `$HOME/.dwarfbot.toml`)
//! 3. `DWARFBOT_*` environment variable
//! 4. Built-in default

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::defaults::{CONFIG_FILE_NAME, DEFAULT_PORT, DEFAULT_SERVER, default_aliases};
use super::types::{Config, EnvVars, FileConfig};
use super::validation::{ValidationError, validate};
use crate::cli::Args;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// `$HOME/.dwarfbot.toml`, if a home directory can be found.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// Read the config file.
///
/// An explicit path must exist. The default path is optional: when it is
/// absent this returns `Ok(None)`.
pub fn load_file(explicit: Option<&Path>) -> Result<Option<(PathBuf, FileConfig)>, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            Some(path) => {
                debug!(path = %path.display(), "No config file found");
                return Ok(None);
            }
            None => return Ok(None),
        },
    };

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let file: FileConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    Ok(Some((path, file)))
}

impl Config {
    /// Load the config file named by `args` (or the default one), read the
    /// environment, and resolve.
    ///
    /// Returns the path of the config file used, if any.
    pub fn load(args: &Args) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let (path, file) = match load_file(args.config.as_deref())? {
            Some((path, file)) => (Some(path), file),
            None => (None, FileConfig::default()),
        };
        let config = Self::resolve(args, file, &EnvVars::from_env())?;
        Ok((config, path))
    }

    /// Merge the three sources over the defaults and validate the result.
    pub fn resolve(args: &Args, file: FileConfig, env: &EnvVars) -> Result<Self, ConfigError> {
        let mut errors = Vec::new();

        let env_port = match env.get("port") {
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) => Some(port),
                Err(_) => {
                    errors.push(ValidationError::InvalidEnvPort(raw.to_string()));
                    None
                }
            },
            None => None,
        };

        let channels = if !args.channels.is_empty() {
            args.channels.clone()
        } else if let Some(channels) = file.channels.filter(|c| !c.is_empty()) {
            channels
        } else {
            env.get("channels")
                .map(|raw| raw.split(',').map(str::to_string).collect())
                .unwrap_or_default()
        };

        let token = args
            .token
            .clone()
            .or(file.token)
            .or_else(|| env.get("token").map(str::to_string))
            .unwrap_or_default();

        let config = Config {
            server: args
                .server
                .clone()
                .or(file.server)
                .or_else(|| env.get("server").map(str::to_string))
                .unwrap_or_else(|| DEFAULT_SERVER.to_string()),
            port: args.port.or(file.port).or(env_port).unwrap_or(DEFAULT_PORT),
            name: args
                .name
                .clone()
                .or(file.name)
                .or_else(|| env.get("name").map(str::to_string))
                .unwrap_or_default(),
            token: token
                .trim()
                .strip_prefix("oauth:")
                .unwrap_or(token.trim())
                .to_string(),
            channels: channels
                .iter()
                .map(|c| c.trim().trim_start_matches('#').to_string())
                .collect(),
            verbose: args.verbose
                || file
                    .verbose
                    .or_else(|| env.flag("verbose"))
                    .unwrap_or(false),
            aliases: file.aliases.unwrap_or_else(default_aliases),
        };

        if let Err(found) = validate(&config) {
            errors.extend(found);
        }

        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}
