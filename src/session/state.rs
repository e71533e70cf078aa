//! Session lifecycle states.
//!
//! `Idle -> Connecting -> Authenticating -> Joining -> Listening`, then
//! `Disconnected -> Connecting` on any connection failure. `Shutdown` is
//! terminal.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, never dialed.
    Idle,
    /// Dialing the server, retrying until it answers.
    Connecting,
    /// Sending PASS and NICK.
    Authenticating,
    /// Sending JOIN for every channel.
    Joining,
    /// Reading lines and dispatching commands.
    Listening,
    /// Connection torn down, waiting out the reconnect delay.
    Disconnected,
    /// Stopped by the channel owner or by fatal misconfiguration.
    Shutdown,
}

impl SessionState {
    /// Whether moving from `self` to `next` follows the lifecycle.
    pub fn can_transition_to(self, next: SessionState) -> bool {
        use SessionState::*;
        matches!(
            (self, next),
            (Idle, Connecting)
                | (Connecting, Authenticating)
                | (Authenticating, Joining)
                | (Authenticating, Disconnected)
                | (Joining, Listening)
                | (Joining, Disconnected)
                | (Listening, Disconnected)
                | (Disconnected, Connecting)
                | (Disconnected, Shutdown)
                | (Idle, Shutdown)
        )
    }

    pub fn is_terminal(self) -> bool {
        self == SessionState::Shutdown
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Connecting => "connecting",
            SessionState::Authenticating => "authenticating",
            SessionState::Joining => "joining",
            SessionState::Listening => "listening",
            SessionState::Disconnected => "disconnected",
            SessionState::Shutdown => "shutdown",
        };
        f.write_str(name)
    }
}
