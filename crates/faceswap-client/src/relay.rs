//! HTTP client for the relay.

use faceswap_core::{Error, RelayRequest, RelayResponse, Result};
use reqwest::Client;
use tracing::debug;

use crate::config::ClientConfig;

pub struct RelayClient {
    client: Client,
    config: ClientConfig,
}

impl RelayClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request to the relay.
    ///
    /// Returns the envelope only when the relay reports success; failure
    /// envelopes become [`Error::Relay`] carrying the relay's `error` text.
    pub async fn call(&self, request: &RelayRequest) -> Result<RelayResponse> {
        let mut builder = self.client.post(&self.config.relay_url).json(request);
        if let Some(key) = &self.config.relay_key {
            builder = builder
                .header("Authorization", format!("Bearer {}", key))
                .header("apikey", key);
        }

        debug!("Posting to relay at {}", self.config.relay_url);
        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Relay request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read relay response: {}", e)))?;

        let envelope: RelayResponse = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(Error::Relay {
                    status: status.as_u16(),
                    message: format!("Relay returned HTTP {}", status.as_u16()),
                    details: Some(text),
                });
            }
            Err(e) => return Err(Error::InvalidResponse(e.to_string())),
        };

        if !status.is_success() || !envelope.success {
            return Err(Error::Relay {
                status: status.as_u16(),
                message: envelope
                    .error
                    .unwrap_or_else(|| "Face swap failed".to_string()),
                details: envelope.details,
            });
        }

        Ok(envelope)
    }

    /// GET a remote result.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Download failed: {}", e)))?;
        if !response.status().is_success() {
            return Err(Error::Transport(format!(
                "Download failed with HTTP {}",
                response.status().as_u16()
            )));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(format!("Download failed: {}", e)))?;
        Ok(bytes.to_vec())
    }
}
