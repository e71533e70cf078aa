//! The bot session: connect, authenticate, join, listen, and reconnect.
//!
//! A [`Session`] owns at most one [`LineTransport`] at a time. Every exit
//! from the listening state goes through [`Session::disconnect`], which
//! parts the channels and closes the stream before the next dial.

mod channels;
mod state;

pub use channels::deduplicate_channels;
pub use state::SessionState;

use std::time::Duration;

use chrono::{DateTime, Utc};
use dwarfbot_proto::{
    AliasSet, ChatEvent, ChatMessage, Command, Connector, LineTransport, TcpConnector,
    TransportError,
};
use tokio::time::Instant;
use tracing::{Instrument, debug, error, info, warn};

use crate::config::Config;
use crate::error::{SessionError, SessionResult};
use crate::handlers::{Dispatcher, Effect};
use crate::telemetry::spans;

/// Pause between losing a connection and dialing again.
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_secs(1);

/// A live bot instance.
pub struct Session<C: Connector = TcpConnector> {
    server: String,
    port: u16,
    name: String,
    token: String,
    channels: Vec<String>,
    connector: C,
    dispatcher: Dispatcher,
    reconnect_delay: Duration,
    transport: Option<LineTransport<C::Stream>>,
    state: SessionState,
    started_at: DateTime<Utc>,
    connected_at: Option<Instant>,
    reconnects: u64,
}

impl Session<TcpConnector> {
    /// Build a session that dials the server over TCP.
    pub fn new(config: &Config) -> Self {
        Self::with_connector(config, TcpConnector)
    }
}

impl<C: Connector> Session<C> {
    pub fn with_connector(config: &Config, connector: C) -> Self {
        let channels = deduplicate_channels(&config.channels);
        let dispatcher = Dispatcher::new(
            config.name.clone(),
            channels.clone(),
            AliasSet::new(&config.aliases),
        );

        Self {
            server: config.server.trim().to_string(),
            port: config.port,
            name: config.name.clone(),
            token: config.token.clone(),
            channels,
            connector,
            dispatcher,
            reconnect_delay: DEFAULT_RECONNECT_DELAY,
            transport: None,
            state: SessionState::Idle,
            started_at: Utc::now(),
            connected_at: None,
            reconnects: 0,
        }
    }

    /// Override the pause between a lost connection and the next dial.
    #[cfg(test)]
    pub fn with_reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of completed disconnect-and-redial cycles.
    pub fn reconnect_count(&self) -> u64 {
        self.reconnects
    }

    /// Configured channels after normalization, in join order.
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// Channels actually joined: the configured ones plus the bot's own.
    pub fn joined_channels(&self) -> Vec<String> {
        let own = self.name.to_lowercase();
        let mut joined = self.channels.clone();
        if !own.is_empty() && !joined.contains(&own) {
            joined.push(own);
        }
        joined
    }

    /// Run until the channel owner orders a shutdown.
    ///
    /// Fails only on misconfiguration detected before the first dial. Lost
    /// connections are never returned to the caller; they are retried.
    pub async fn run(&mut self) -> SessionResult {
        if self.state.is_terminal() {
            return Ok(());
        }
        if let Err(e) = self.preflight() {
            error!(error = %e, code = e.error_code(), "Refusing to start");
            self.transition(SessionState::Shutdown);
            return Err(e);
        }

        info!(
            server = %self.server,
            port = self.port,
            name = %self.name,
            channels = ?self.channels(),
            aliases = ?self.dispatcher.aliases().iter().collect::<Vec<_>>(),
            "Starting dwarfbot"
        );

        loop {
            let span = spans::connection(&self.server, self.port, self.reconnects);
            match self.connect_and_listen().instrument(span).await {
                Ok(()) => {
                    self.disconnect().await;
                    self.transition(SessionState::Shutdown);
                    let uptime = Utc::now() - self.started_at;
                    info!(
                        uptime_secs = uptime.num_seconds(),
                        reconnects = self.reconnects,
                        "Shut down"
                    );
                    return Ok(());
                }
                Err(e) if e.is_fatal() => {
                    self.disconnect().await;
                    self.transition(SessionState::Shutdown);
                    return Err(e);
                }
                Err(SessionError::Transport(e)) if e.is_disconnect() => {
                    warn!(error = %e, "Connection lost");
                    self.disconnect().await;
                }
                Err(e) => {
                    warn!(error = %e, code = e.error_code(), "Connection failed");
                    self.disconnect().await;
                }
            }

            tokio::time::sleep(self.reconnect_delay).await;
            info!("restarting bot...");
            self.reconnects += 1;
        }
    }

    /// Post `text` to `channel`. Empty text is refused and nothing is sent.
    pub async fn say(&mut self, channel: &str, text: &str) -> SessionResult {
        if text.is_empty() {
            return Err(SessionError::EmptyMessage);
        }

        let command = Command::privmsg(channel, text);
        self.send(&command).await?;
        info!("{} #{}: {}", self.name, channel.trim_start_matches('#'), text);
        Ok(())
    }

    fn preflight(&self) -> SessionResult {
        if self.server.is_empty() {
            return Err(SessionError::MissingServer);
        }
        if self.port == 0 {
            return Err(SessionError::MissingPort);
        }
        Ok(())
    }

    /// One connection's lifetime. `Ok` means shutdown was requested; any
    /// error means the connection is unusable.
    async fn connect_and_listen(&mut self) -> SessionResult {
        self.connect().await;
        self.authenticate().await?;
        self.join().await?;
        self.listen().await
    }

    /// Dial until the server answers. No delay and no attempt cap.
    async fn connect(&mut self) {
        self.transition(SessionState::Connecting);

        let mut attempts: u64 = 0;
        loop {
            attempts += 1;
            match self.connector.connect(&self.server, self.port).await {
                Ok(transport) => {
                    info!(peer = %transport.peer(), attempts, "Connected");
                    self.transport = Some(transport);
                    self.connected_at = Some(Instant::now());
                    return;
                }
                Err(e) => {
                    warn!(error = %e, attempts, "Dial failed, retrying");
                    tokio::task::yield_now().await;
                }
            }
        }
    }

    /// PASS then NICK. The server's acknowledgement is not awaited.
    async fn authenticate(&mut self) -> SessionResult {
        self.transition(SessionState::Authenticating);

        let pass = Command::pass(&self.token);
        let nick = Command::nick(&self.name);
        self.send(&pass).await?;
        self.send(&nick).await
    }

    async fn join(&mut self) -> SessionResult {
        self.transition(SessionState::Joining);

        for channel in self.joined_channels() {
            self.send(&Command::join(&channel)).await?;
            info!(channel = %channel, "Joined");
        }
        Ok(())
    }

    async fn listen(&mut self) -> SessionResult {
        self.transition(SessionState::Listening);

        loop {
            let line = self.read_line().await?;
            match ChatEvent::parse(&line) {
                Some(ChatEvent::ServerPing) => self.send(&Command::pong()).await?,
                Some(ChatEvent::ChatMessage(msg)) => {
                    if self.handle_message(&msg).await {
                        return Ok(());
                    }
                }
                None => {}
            }
        }
    }

    /// Decode and dispatch one chat message. Returns true on shutdown.
    async fn handle_message(&mut self, msg: &ChatMessage) -> bool {
        info!("{} #{}: {}", msg.sender, msg.channel, msg.text);

        let Some(cmd) = self.dispatcher.decode(msg) else {
            return false;
        };

        let span = spans::command(&cmd.name, &cmd.user, &cmd.channel);
        let effects = span.in_scope(|| self.dispatcher.dispatch(&cmd));

        for effect in effects {
            match effect {
                Effect::Say { channel, text } => {
                    if let Err(e) = self.say(&channel, &text).instrument(span.clone()).await {
                        warn!(error = %e, channel = %channel, "Failed to send reply");
                    }
                }
                Effect::Shutdown => return true,
            }
        }
        false
    }

    /// Part every joined channel, close the stream, and report how long the
    /// connection lasted. Part failures are ignored.
    async fn disconnect(&mut self) {
        let channels = self.joined_channels();

        if let Some(mut transport) = self.transport.take() {
            for channel in &channels {
                if let Err(e) = transport.send(&Command::part(channel)).await {
                    debug!(error = %e, "Skipping remaining PARTs");
                    break;
                }
            }
            transport.close().await;

            let elapsed = self
                .connected_at
                .take()
                .map(|at| at.elapsed())
                .unwrap_or_default();
            info!(
                peer = %transport.peer(),
                elapsed_secs = elapsed.as_secs_f64(),
                "Disconnected"
            );
        }

        self.transition(SessionState::Disconnected);
    }

    async fn read_line(&mut self) -> SessionResult<String> {
        let transport = self
            .transport
            .as_mut()
            .ok_or(SessionError::Transport(TransportError::StreamClosed))?;
        let line = transport.read_line().await?;
        debug!("< {}", line);
        Ok(line)
    }

    async fn send(&mut self, command: &Command) -> SessionResult {
        let transport = self
            .transport
            .as_mut()
            .ok_or(SessionError::Transport(TransportError::StreamClosed))?;

        match command {
            Command::Pass(_) => debug!("> PASS oauth:<redacted>"),
            _ => debug!("> {}", command),
        }
        transport.send(command).await?;
        Ok(())
    }

    fn transition(&mut self, next: SessionState) {
        if !self.state.can_transition_to(next) {
            warn!(from = %self.state, to = %next, "Unexpected session transition");
        }
        debug!(from = %self.state, to = %next, "Session state");
        self.state = next;
    }
}
