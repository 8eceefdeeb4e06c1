//! Client configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a relay client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Page origin the terminal is served from; the socket endpoint is
    /// derived from it (see [`crate::transport::socket_url`])
    pub origin: String,

    /// How long to wait for the WebSocket handshake
    #[serde(with = "duration_secs")]
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: "http://127.0.0.1:8080".to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Serialize `Duration` as whole seconds, which reads better in TOML
mod duration_secs {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
