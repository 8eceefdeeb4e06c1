//! Client error types

use thiserror::Error;
use wt_protocol::ProtocolError;

/// Errors that can occur on the client side of the relay
#[derive(Error, Debug)]
pub enum ClientError {
    /// Protocol error
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Origin is not an http(s) URL
    #[error("Invalid origin: {0}")]
    InvalidOrigin(String),

    /// Attempted send with no open connection
    #[error("Transport unavailable")]
    TransportUnavailable,

    /// Failed to establish the WebSocket connection
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Session was already started once
    #[error("Session already started")]
    AlreadyStarted,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
