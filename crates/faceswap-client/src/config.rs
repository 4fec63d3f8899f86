//! Client configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_RELAY_URL: &str = "http://localhost:8787/";

/// Where the relay lives and how to authenticate against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub relay_url: String,
    /// Sent as `Authorization: Bearer <key>` and `apikey: <key>` when set.
    #[serde(default, skip_serializing)]
    pub relay_key: Option<String>,
}

impl ClientConfig {
    pub fn new(relay_url: impl Into<String>) -> Self {
        Self {
            relay_url: relay_url.into(),
            relay_key: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.relay_key = Some(key.into());
        self
    }

    /// Create configuration from `FACESWAP_RELAY_URL` / `FACESWAP_RELAY_KEY`.
    pub fn from_env() -> Self {
        let relay_url = std::env::var("FACESWAP_RELAY_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string());
        let relay_key = std::env::var("FACESWAP_RELAY_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        Self {
            relay_url,
            relay_key,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RELAY_URL)
    }
}
