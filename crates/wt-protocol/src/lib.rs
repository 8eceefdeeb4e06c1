//! wt-protocol: Wire protocol for the webterm terminal relay
//!
//! This crate defines the framing used between a browser-hosted terminal
//! and the host process serving it over a single WebSocket connection.

pub mod codec;
pub mod error;
pub mod frame;

pub use codec::{FrameDecoder, FrameEncoder};
pub use error::ProtocolError;
pub use frame::{ClientFrame, HostFrame, WindowSize, WireMessage, TAG_OUTPUT, TAG_RESIZE};
