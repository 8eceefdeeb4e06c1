//! Frame type definitions
//!
//! The relay multiplexes event kinds over one WebSocket using a
//! single-byte tag at the start of each message:
//! - host -> client: `'D'` + raw terminal output bytes
//! - client -> host: `'J'` + JSON resize record, sent as a text message
//! - client -> host: untagged raw input bytes, sent as a binary message
//!
//! Input is deliberately untagged; the host tells it apart from control
//! frames by the WebSocket message type (binary = input, text = control).
//! A one-byte discriminator caps the protocol at 256 frame kinds, which
//! is plenty for this use case and avoids length-prefixed framing.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Tag byte for host->client terminal output
pub const TAG_OUTPUT: u8 = b'D';

/// Tag byte for client->host resize control frames
pub const TAG_RESIZE: u8 = b'J';

/// One WebSocket message as seen by the transport.
///
/// Mirrors the two payload modes the socket supports; the tag-based
/// dispatch in [`crate::codec`] sits on top of this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireMessage {
    /// Binary payload
    Binary(Bytes),
    /// Text payload
    Text(String),
}

impl WireMessage {
    /// Borrow the payload as bytes regardless of mode
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            WireMessage::Binary(b) => b,
            WireMessage::Text(s) => s.as_bytes(),
        }
    }

    /// Whether the message carries no payload at all
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// Terminal dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Number of columns
    pub cols: u16,
    /// Number of rows
    pub rows: u16,
}

impl WindowSize {
    /// Create a new window size
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self { cols: 80, rows: 24 }
    }
}

/// Decoded host->client frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostFrame {
    /// Raw terminal output to render verbatim
    Output(Bytes),
    /// Unrecognized tag byte; carries the whole raw message for logging.
    /// Forward-compatible no-op, never fatal.
    Unknown(Bytes),
    /// Empty delivery, silently dropped
    Ignored,
}

/// Typed client->host event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientFrame {
    /// Raw bytes the user typed or pasted
    Input(Bytes),
    /// Terminal geometry change
    Resize(WindowSize),
}
