//! Relay configuration.

use serde::{Deserialize, Serialize};

/// Segmind face swap v2 endpoint.
pub const DEFAULT_SEGMIND_URL: &str = "https://api.segmind.com/v1/face-swap-v2";

pub const DEFAULT_PORT: u16 = 8787;

/// Environment variable holding the vendor API key.
pub const API_KEY_VAR: &str = "SEGMIND_API_KEY";

/// Relay configuration, built once at startup and injected into the handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// HTTP server port.
    pub port: u16,
    /// Vendor API key. `None` leaves the relay running but every swap fails
    /// with a configuration error.
    #[serde(skip_serializing)]
    pub segmind_api_key: Option<String>,
    /// Vendor face swap endpoint.
    pub segmind_url: String,
}

impl RelayConfig {
    pub fn new(segmind_api_key: Option<String>) -> Self {
        Self {
            port: DEFAULT_PORT,
            segmind_api_key: segmind_api_key.filter(|k| !k.trim().is_empty()),
            segmind_url: DEFAULT_SEGMIND_URL.to_string(),
        }
    }

    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let segmind_url =
            std::env::var("SEGMIND_API_URL").unwrap_or_else(|_| DEFAULT_SEGMIND_URL.to_string());

        Self {
            port,
            segmind_url,
            ..Self::new(std::env::var(API_KEY_VAR).ok())
        }
    }

    pub fn with_segmind_url(mut self, url: impl Into<String>) -> Self {
        self.segmind_url = url.into();
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.segmind_api_key.as_deref()
    }
}
