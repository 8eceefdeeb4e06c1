//! wt-client: Client half of the webterm terminal relay
//!
//! Owns the connection lifecycle and mediates between a WebSocket
//! transport and a terminal sink. The sink renders bytes and captures
//! user input; terminal emulation itself lives entirely on that side of
//! the seam and is not reimplemented here.

pub mod config;
pub mod error;
pub mod session;
pub mod sink;
pub mod transport;

pub use config::ClientConfig;
pub use error::ClientError;
pub use session::{SessionController, SessionState};
pub use sink::{TerminalEvent, TerminalSink};
pub use transport::{run_session, socket_url, Transport, WsTransport};
