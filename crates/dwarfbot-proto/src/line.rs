//! Line-based codec for tokio.
//!
//! Reads `\n`-terminated lines (tolerating a missing `\r`) and writes
//! `\r\n`-terminated lines. A bad inbound line never ends the stream:
//! invalid UTF-8 is replaced and over-long lines are skipped.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};
use tracing::warn;

use crate::error;

/// Line-based codec that handles CRLF-terminated protocol lines.
///
/// Decoded lines have their terminator stripped. Encoded lines get `\r\n`
/// appended and must not carry a line break of their own.
#[derive(Debug)]
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length, terminator included
    max_len: usize,
    /// Dropping the tail of an over-long line until its `\n`
    discarding: bool,
}

impl LineCodec {
    /// Create a new codec limited to `max_len` bytes per line.
    pub fn new(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
            discarding: false,
        }
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new(crate::transport::MAX_IRC_LINE_LEN)
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        loop {
            let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') else {
                if self.discarding {
                    src.clear();
                    self.next_index = 0;
                } else if src.len() > self.max_len {
                    warn!(len = src.len(), limit = self.max_len, "Skipping over-long line");
                    src.clear();
                    self.next_index = 0;
                    self.discarding = true;
                } else {
                    // No complete line yet - remember where we stopped
                    self.next_index = src.len();
                }
                return Ok(None);
            };

            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if std::mem::take(&mut self.discarding) {
                continue;
            }
            if line.len() > self.max_len {
                warn!(len = line.len(), limit = self.max_len, "Skipping over-long line");
                continue;
            }

            let mut end = line.len() - 1;
            if end > 0 && line[end - 1] == b'\r' {
                end -= 1;
            }

            return Ok(Some(String::from_utf8_lossy(&line[..end]).into_owned()));
        }
    }
}

impl Encoder<String> for LineCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> error::Result<()> {
        if line.contains(&['\r', '\n'][..]) {
            return Err(error::ProtocolError::EmbeddedLineBreak);
        }

        dst.reserve(line.len() + 2);
        dst.extend_from_slice(line.as_bytes());
        dst.extend_from_slice(b"\r\n");
        Ok(())
    }
}
