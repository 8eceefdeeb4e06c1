//! Protocol error types

use thiserror::Error;

/// Errors that can occur during protocol operations
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Resize with a zero dimension
    #[error("Invalid terminal dimensions: {cols}x{rows}")]
    InvalidDimension { cols: u16, rows: u16 },

    /// Unknown tag byte on a client control frame
    #[error("Unknown frame tag: 0x{0:02x}")]
    UnknownTag(u8),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
