//! Transport abstraction and the WebSocket implementation
//!
//! `Transport` is the narrow seam the session controller sends through;
//! `WsTransport` backs it with a tokio-tungstenite connection driven by
//! [`run_session`]. The controller itself stays synchronous: the run
//! loop is the single task that touches it, feeding it socket messages
//! and terminal events in arrival order.

use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite};

use wt_protocol::WireMessage;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::SessionController;
use crate::sink::{TerminalEvent, TerminalSink};

/// Well-known socket path on the page origin
pub const SOCKET_PATH: &str = "/socket/";

/// Something the session can transmit wire messages through
pub trait Transport {
    /// Queue a message for transmission.
    ///
    /// Best-effort: a queued message may still be lost if the
    /// connection dies before it is flushed.
    fn send(&self, msg: WireMessage) -> Result<(), ClientError>;
}

/// Derive the socket endpoint from a page origin.
///
/// The scheme is upgraded to its WebSocket equivalent (`http` -> `ws`,
/// `https` -> `wss`) and the well-known path appended.
pub fn socket_url(origin: &str) -> Result<String, ClientError> {
    let (scheme, rest) = if let Some(rest) = origin.strip_prefix("https://") {
        ("wss", rest)
    } else if let Some(rest) = origin.strip_prefix("http://") {
        ("ws", rest)
    } else {
        return Err(ClientError::InvalidOrigin(origin.to_string()));
    };

    let host = rest.trim_end_matches('/');
    if host.is_empty() {
        return Err(ClientError::InvalidOrigin(origin.to_string()));
    }
    Ok(format!("{}://{}{}", scheme, host, SOCKET_PATH))
}

/// Sending half of a live WebSocket connection.
///
/// Messages go into an unbounded queue flushed by the [`run_session`]
/// loop; `send` fails only once that loop is gone.
pub struct WsTransport {
    tx: mpsc::UnboundedSender<WireMessage>,
}

impl Transport for WsTransport {
    fn send(&self, msg: WireMessage) -> Result<(), ClientError> {
        self.tx
            .send(msg)
            .map_err(|_| ClientError::TransportUnavailable)
    }
}

fn to_ws_message(msg: WireMessage) -> tungstenite::Message {
    match msg {
        WireMessage::Binary(data) => tungstenite::Message::Binary(data.to_vec()),
        WireMessage::Text(text) => tungstenite::Message::Text(text),
    }
}

/// Drive one session over one WebSocket connection, open to close.
///
/// Connects to the origin's socket endpoint, walks the controller
/// through its lifecycle and pumps three directions of traffic until
/// the connection ends:
/// - inbound socket messages into [`SessionController::handle_message`]
/// - terminal events from `events` into the input/resize handlers
/// - controller-transmitted frames out onto the socket
///
/// Returns once the session is `Closed`. Connection failures close the
/// session and surface as [`ClientError::Connect`]; a host that simply
/// never answers beyond the handshake keeps the loop parked, since the
/// protocol has no timeouts of its own.
pub async fn run_session<S: TerminalSink>(
    config: &ClientConfig,
    controller: &mut SessionController<S, WsTransport>,
    mut events: mpsc::UnboundedReceiver<TerminalEvent>,
) -> Result<(), ClientError> {
    let url = socket_url(&config.origin)?;

    let (tx, mut outbound) = mpsc::unbounded_channel();
    controller.start(WsTransport { tx })?;

    tracing::debug!(%url, "connecting");
    let ws_stream = match tokio::time::timeout(config.connect_timeout, connect_async(url.as_str()))
        .await
    {
        Ok(Ok((ws_stream, _response))) => ws_stream,
        Ok(Err(e)) => {
            controller.handle_close();
            return Err(ClientError::Connect(e.to_string()));
        }
        Err(_) => {
            controller.handle_close();
            return Err(ClientError::Connect(format!(
                "handshake timed out after {:?}",
                config.connect_timeout
            )));
        }
    };
    tracing::info!(%url, "connected");
    controller.handle_open();

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();
    let mut events_closed = false;

    loop {
        tokio::select! {
            msg = outbound.recv() => match msg {
                Some(msg) => {
                    if let Err(e) = ws_sender.send(to_ws_message(msg)).await {
                        tracing::error!("send failed: {}", e);
                        break;
                    }
                }
                // Controller dropped its transport handle
                None => break,
            },

            event = events.recv(), if !events_closed => match event {
                Some(TerminalEvent::Input(data)) => controller.handle_input(&data),
                Some(TerminalEvent::Resize { cols, rows }) => {
                    if let Err(e) = controller.handle_resize(cols, rows) {
                        tracing::warn!("resize rejected: {}", e);
                    }
                }
                None => events_closed = true,
            },

            incoming = ws_receiver.next() => match incoming {
                Some(Ok(tungstenite::Message::Binary(data))) => controller.handle_message(&data),
                Some(Ok(tungstenite::Message::Text(text))) => {
                    controller.handle_message(text.as_bytes())
                }
                Some(Ok(tungstenite::Message::Close(_))) | None => {
                    tracing::info!("connection closed by host");
                    break;
                }
                // Ping/pong are answered by tungstenite itself
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::error!("websocket error: {}", e);
                    break;
                }
            },
        }
    }

    controller.handle_close();
    Ok(())
}
