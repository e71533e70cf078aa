//! Bot process management.

use std::io::Write;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tempfile::NamedTempFile;

const ENV_VARS: &[&str] = &[
    "DWARFBOT_SERVER",
    "DWARFBOT_PORT",
    "DWARFBOT_NAME",
    "DWARFBOT_TOKEN",
    "DWARFBOT_CHANNELS",
    "DWARFBOT_VERBOSE",
];

/// A running `dwarfbot` binary. Killed on drop.
pub struct BotProcess {
    child: Child,
    _config: NamedTempFile,
}

impl BotProcess {
    /// Start the bot against `127.0.0.1:port` as `dwarfbot` in `#hammerdwarf`.
    pub fn spawn(port: u16) -> anyhow::Result<Self> {
        Self::spawn_with_args(&[
            "-s",
            "127.0.0.1",
            "-p",
            &port.to_string(),
            "-c",
            "hammerdwarf",
            "-n",
            "dwarfbot",
            "--token",
            "oauth:abc",
        ])
    }

    /// Start the bot with explicit arguments. An empty config file is always
    /// passed so the user's own config never leaks into tests.
    pub fn spawn_with_args(args: &[&str]) -> anyhow::Result<Self> {
        let mut config = NamedTempFile::new()?;
        writeln!(config, "# empty")?;

        let mut command = Command::new(env!("CARGO_BIN_EXE_dwarfbot"));
        command
            .args(args)
            .arg("--config")
            .arg(config.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        for var in ENV_VARS {
            command.env_remove(var);
        }

        Ok(Self {
            child: command.spawn()?,
            _config: config,
        })
    }

    /// Poll for exit, giving up after `limit`.
    pub async fn wait_exit(&mut self, limit: Duration) -> anyhow::Result<ExitStatus> {
        let deadline = Instant::now() + limit;
        loop {
            if let Some(status) = self.child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                anyhow::bail!("bot did not exit within {:?}", limit);
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }
}

impl Drop for BotProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
