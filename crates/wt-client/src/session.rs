//! Session controller
//!
//! One `SessionController` spans exactly one connection from open to
//! close. It routes decoded host frames to the terminal sink and
//! terminal-originated events through the encoder to the transport.
//! There is no reconnection: `Closed` is terminal, and a new session
//! must be created for each connection attempt.
//!
//! All handlers are synchronous and run to completion, so output writes
//! happen in frame arrival order and transmitted events in invocation
//! order. The controller is driven from a single task (see
//! [`crate::transport::run_session`]) and needs no locking.

use wt_protocol::{FrameDecoder, FrameEncoder, HostFrame, WindowSize};

use crate::error::ClientError;
use crate::sink::TerminalSink;
use crate::transport::Transport;

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Session exists but has not been started
    Created,
    /// Transport attached, handshake in flight
    Connecting,
    /// Connection is live
    Open,
    /// Connection closed by either side; terminal state
    Closed,
}

/// Mediates between one transport and one terminal sink
pub struct SessionController<S, T> {
    sink: S,
    transport: Option<T>,
    state: SessionState,
    /// Last geometry reported by the sink, if any
    size: Option<WindowSize>,
}

impl<S: TerminalSink, T: Transport> SessionController<S, T> {
    /// Create a session around a terminal sink.
    ///
    /// Call this once the sink signals readiness; the session does
    /// nothing until [`start`](Self::start).
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            transport: None,
            state: SessionState::Created,
            size: None,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Last size reported via [`handle_resize`](Self::handle_resize)
    pub fn size(&self) -> Option<WindowSize> {
        self.size
    }

    /// Attach the transport and begin connecting.
    ///
    /// A session owns exactly one connection; starting twice is an
    /// error rather than a reconnect.
    pub fn start(&mut self, transport: T) -> Result<(), ClientError> {
        if self.state != SessionState::Created {
            return Err(ClientError::AlreadyStarted);
        }
        self.transport = Some(transport);
        self.state = SessionState::Connecting;
        self.sink.println("Loading terminal...");
        Ok(())
    }

    /// The transport finished its handshake
    pub fn handle_open(&mut self) {
        if self.state == SessionState::Connecting {
            tracing::info!("session open");
            self.state = SessionState::Open;
        }
    }

    /// A message arrived from the host.
    ///
    /// Unknown frame kinds are logged and skipped so the protocol can
    /// grow new tags without breaking old clients; empty deliveries are
    /// dropped outright.
    pub fn handle_message(&mut self, payload: &[u8]) {
        match FrameDecoder::decode(payload) {
            HostFrame::Output(data) => self.sink.print(&data),
            HostFrame::Unknown(raw) => {
                tracing::warn!(tag = raw[0], len = raw.len(), "unknown frame, skipping");
            }
            HostFrame::Ignored => {}
        }
    }

    /// The sink reported user input (typed keys or a paste).
    ///
    /// With no open connection the bytes are dropped; there is no queue
    /// and no retry.
    pub fn handle_input(&mut self, data: &[u8]) {
        if self.state != SessionState::Open {
            tracing::warn!(len = data.len(), "input dropped, no open connection");
            return;
        }
        self.transmit(FrameEncoder::encode_input(data));
    }

    /// The sink reported a geometry change.
    ///
    /// Zero dimensions are rejected before the state check; a valid
    /// resize with no open connection is dropped, not queued.
    pub fn handle_resize(&mut self, cols: u16, rows: u16) -> Result<(), ClientError> {
        let size = WindowSize::new(cols, rows);
        let msg = FrameEncoder::encode_resize(size)?;
        self.size = Some(size);
        if self.state != SessionState::Open {
            tracing::warn!(cols, rows, "resize dropped, no open connection");
            return Ok(());
        }
        self.transmit(msg);
        Ok(())
    }

    /// The transport closed or errored. Idempotent.
    pub fn handle_close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        tracing::info!("session closed");
        self.state = SessionState::Closed;
        self.transport = None;
        self.sink.println("Disconnected.");
    }

    /// Borrow the sink (primarily for the embedder after close)
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn transmit(&mut self, msg: wt_protocol::WireMessage) {
        // Only reachable while Open, so a send failure means the
        // connection died under us; the close callback will follow.
        if let Some(transport) = &self.transport {
            if let Err(e) = transport.send(msg) {
                tracing::warn!("send failed, dropping frame: {}", e);
            }
        }
    }
}
