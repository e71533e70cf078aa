//! Fake chat server.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct FakeIrcServer {
    listener: TcpListener,
}

impl FakeIrcServer {
    pub async fn bind() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        Ok(Self { listener })
    }

    pub fn port(&self) -> u16 {
        self.listener
            .local_addr()
            .map(|addr| addr.port())
            .unwrap_or_default()
    }

    /// Wait for the bot to dial in.
    pub async fn accept(&self) -> anyhow::Result<BotConnection> {
        let (stream, _) = timeout(DEFAULT_TIMEOUT, self.listener.accept()).await??;
        let (read, write) = stream.into_split();
        Ok(BotConnection {
            reader: BufReader::new(read),
            writer: write,
        })
    }
}

/// The server side of one bot connection.
pub struct BotConnection {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl BotConnection {
    /// Send one line; CRLF is appended.
    pub async fn send(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\r\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Next line from the bot, terminator stripped.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(DEFAULT_TIMEOUT).await
    }

    pub async fn recv_timeout(&mut self, limit: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(limit, self.reader.read_line(&mut line)).await??;
        if n == 0 {
            anyhow::bail!("bot closed the connection");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Assert the bot sends nothing for `quiet`.
    pub async fn expect_silence(&mut self, quiet: Duration) {
        if let Ok(line) = self.recv_timeout(quiet).await {
            panic!("expected silence, bot sent {:?}", line);
        }
    }

    /// Assert the bot hangs up.
    pub async fn expect_eof(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        let n = timeout(DEFAULT_TIMEOUT, self.reader.read_line(&mut line)).await??;
        anyhow::ensure!(n == 0, "expected EOF, got {:?}", line);
        Ok(())
    }

    /// Consume PASS, NICK and the JOINs, returning them in order.
    pub async fn registration(&mut self, joins: usize) -> anyhow::Result<Vec<String>> {
        let mut lines = Vec::with_capacity(joins + 2);
        for _ in 0..joins + 2 {
            lines.push(self.recv().await?);
        }
        Ok(lines)
    }
}
