//! Encoding and decoding of relay frames
//!
//! Both halves are stateless: a WebSocket delivers whole messages, so
//! there is no partial-read buffering to carry between calls.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::frame::{ClientFrame, HostFrame, WindowSize, WireMessage, TAG_OUTPUT, TAG_RESIZE};

/// JSON body of a resize control frame: `{"resize":{"cols":..,"rows":..}}`
#[derive(Debug, Serialize, Deserialize)]
struct ResizeRecord {
    resize: WindowSize,
}

/// Serializes typed client->host events into wire messages
#[derive(Debug, Default)]
pub struct FrameEncoder;

impl FrameEncoder {
    /// Encode user input bytes.
    ///
    /// Input travels untagged as a binary message; the bytes go out
    /// exactly as given.
    pub fn encode_input(data: &[u8]) -> WireMessage {
        WireMessage::Binary(Bytes::copy_from_slice(data))
    }

    /// Encode a resize notification as a tagged text frame.
    ///
    /// Rejects zero dimensions before anything reaches the wire.
    pub fn encode_resize(size: WindowSize) -> Result<WireMessage, ProtocolError> {
        if size.cols == 0 || size.rows == 0 {
            return Err(ProtocolError::InvalidDimension {
                cols: size.cols,
                rows: size.rows,
            });
        }

        let body = serde_json::to_string(&ResizeRecord { resize: size })?;
        let mut text = String::with_capacity(1 + body.len());
        text.push(TAG_RESIZE as char);
        text.push_str(&body);
        Ok(WireMessage::Text(text))
    }
}

/// Parses received wire messages into typed events
#[derive(Debug, Default)]
pub struct FrameDecoder;

impl FrameDecoder {
    /// Decode a host->client message.
    ///
    /// Empty deliveries are ignored and unknown tags are surfaced as
    /// [`HostFrame::Unknown`]; neither is an error, so the session can
    /// tolerate heartbeats and future frame kinds.
    pub fn decode(payload: &[u8]) -> HostFrame {
        match payload.first() {
            None => HostFrame::Ignored,
            Some(&TAG_OUTPUT) => HostFrame::Output(Bytes::copy_from_slice(&payload[1..])),
            Some(_) => HostFrame::Unknown(Bytes::copy_from_slice(payload)),
        }
    }

    /// Decode a client->host message, as the host side would.
    ///
    /// Binary messages are untagged input; text messages carry a tag
    /// byte. Returns `Ok(None)` for empty deliveries.
    pub fn decode_client(msg: &WireMessage) -> Result<Option<ClientFrame>, ProtocolError> {
        if msg.is_empty() {
            return Ok(None);
        }
        match msg {
            WireMessage::Binary(data) => Ok(Some(ClientFrame::Input(data.clone()))),
            WireMessage::Text(text) => {
                let tag = text.as_bytes()[0];
                if tag != TAG_RESIZE {
                    return Err(ProtocolError::UnknownTag(tag));
                }
                let record: ResizeRecord = serde_json::from_str(&text[1..])?;
                Ok(Some(ClientFrame::Resize(record.resize)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_input_is_identity() {
        let msg = FrameEncoder::encode_input(b"ls -la\n");
        assert_eq!(msg, WireMessage::Binary(Bytes::from_static(b"ls -la\n")));
    }

    #[test]
    fn test_encode_input_empty() {
        let msg = FrameEncoder::encode_input(b"");
        assert!(msg.is_empty());
    }

    #[test]
    fn test_encode_resize_exact_bytes() {
        let msg = FrameEncoder::encode_resize(WindowSize::new(80, 24)).unwrap();
        assert_eq!(
            msg,
            WireMessage::Text(r#"J{"resize":{"cols":80,"rows":24}}"#.to_string())
        );
    }

    #[test]
    fn test_encode_resize_zero_dimension() {
        for size in [WindowSize::new(0, 24), WindowSize::new(80, 0)] {
            let err = FrameEncoder::encode_resize(size).unwrap_err();
            assert!(matches!(err, ProtocolError::InvalidDimension { .. }));
        }
    }

    #[test]
    fn test_resize_roundtrip() {
        for size in [
            WindowSize::new(1, 1),
            WindowSize::new(80, 24),
            WindowSize::new(u16::MAX, u16::MAX),
        ] {
            let msg = FrameEncoder::encode_resize(size).unwrap();
            let decoded = FrameDecoder::decode_client(&msg).unwrap().unwrap();
            assert_eq!(decoded, ClientFrame::Resize(size));
        }
    }

    #[test]
    fn test_input_roundtrip() {
        let msg = FrameEncoder::encode_input(b"x\x1b[A");
        let decoded = FrameDecoder::decode_client(&msg).unwrap().unwrap();
        assert_eq!(decoded, ClientFrame::Input(Bytes::from_static(b"x\x1b[A")));
    }

    #[test]
    fn test_decode_empty_is_ignored() {
        assert_eq!(FrameDecoder::decode(&[]), HostFrame::Ignored);
    }

    #[test]
    fn test_decode_output() {
        let frame = FrameDecoder::decode(b"Dhello");
        assert_eq!(frame, HostFrame::Output(Bytes::from_static(b"hello")));
    }

    #[test]
    fn test_decode_output_empty_payload() {
        let frame = FrameDecoder::decode(b"D");
        assert_eq!(frame, HostFrame::Output(Bytes::new()));
    }

    #[test]
    fn test_decode_unknown_tag() {
        let frame = FrameDecoder::decode(&[0x5A, 1, 2, 3]);
        assert_eq!(
            frame,
            HostFrame::Unknown(Bytes::from_static(&[0x5A, 1, 2, 3]))
        );
    }

    #[test]
    fn test_decode_client_empty() {
        let msg = WireMessage::Text(String::new());
        assert!(FrameDecoder::decode_client(&msg).unwrap().is_none());
    }

    #[test]
    fn test_decode_client_unknown_text_tag() {
        let msg = WireMessage::Text("Q{}".to_string());
        let err = FrameDecoder::decode_client(&msg).unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownTag(b'Q')));
    }

    #[test]
    fn test_decode_client_malformed_resize() {
        let msg = WireMessage::Text("J{not json".to_string());
        let err = FrameDecoder::decode_client(&msg).unwrap_err();
        assert!(matches!(err, ProtocolError::Serialization(_)));
    }
}
