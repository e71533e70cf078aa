//! Logging setup and standard spans.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug over info.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (tests); keep that one.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Standardized span constructors for the session.
pub mod spans {
    use tracing::{Span, info_span};

    /// Span covering one connection attempt and everything on it.
    pub fn connection(server: &str, port: u16, attempt: u64) -> Span {
        info_span!("connection", server = %server, port = port, attempt = attempt)
    }

    /// Span covering dispatch of one bot command.
    pub fn command(name: &str, user: &str, channel: &str) -> Span {
        info_span!("command", command = %name, user = %user, channel = %channel)
    }
}
