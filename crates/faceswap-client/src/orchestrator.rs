//! Orchestrator — drives one face swap attempt end to end.

use std::path::Path;

use faceswap_core::data_uri;
use faceswap_core::{Error, RelayRequest, Result};
use tracing::{error, info};

use crate::config::ClientConfig;
use crate::relay::RelayClient;
use crate::types::{Progress, Stage, SwapOutput, SwapRequest};

pub const UPLOADING_PERCENT: u8 = 10;
pub const DISPATCHED_PERCENT: u8 = 30;
pub const DECODING_PERCENT: u8 = 80;
pub const COMPLETED_PERCENT: u8 = 100;

pub struct Orchestrator {
    relay: RelayClient,
}

impl Orchestrator {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            relay: RelayClient::new(config),
        }
    }

    pub fn relay(&self) -> &RelayClient {
        &self.relay
    }

    /// Run one swap: exactly one relay call, no retries.
    ///
    /// `on_progress` sees uploading (10), processing (30, 80) and completed
    /// (100) in that order. On failure the sequence stops early and
    /// completed is never reported.
    pub async fn execute_swap<F>(&self, request: &SwapRequest, mut on_progress: F) -> Result<SwapOutput>
    where
        F: FnMut(&Progress),
    {
        info!(
            "Starting face swap: photo={}, gif={}",
            request.source().describe(),
            request.target()
        );

        on_progress(&Progress::new(
            Stage::Uploading,
            UPLOADING_PERCENT,
            "Preparing photo for upload",
        ));
        let relay_request = RelayRequest::new(request.source().to_fetchable(), request.target());

        on_progress(&Progress::new(
            Stage::Processing,
            DISPATCHED_PERCENT,
            "Swapping faces, this may take a few moments",
        ));
        let response = self.relay.call(&relay_request).await.map_err(|e| {
            error!("Face swap failed: {}", e);
            e
        })?;

        on_progress(&Progress::new(
            Stage::Processing,
            DECODING_PERCENT,
            "Receiving face swap result",
        ));
        let image = response
            .image
            .ok_or_else(|| Error::InvalidResponse("success response without image".into()))?;
        if data_uri::is_data_uri(&image) {
            data_uri::decode(&image)?;
        } else if !(image.starts_with("https://") || image.starts_with("http://")) {
            return Err(Error::InvalidResponse(
                "image is neither a data URI nor a URL".into(),
            ));
        }

        let output = SwapOutput {
            image,
            message: response
                .message
                .unwrap_or_else(|| "Face swap completed".to_string()),
            processing_time: response.processing_time,
        };

        on_progress(&Progress::new(
            Stage::Completed,
            COMPLETED_PERCENT,
            "Your face swap GIF is ready",
        ));
        info!("Face swap completed");

        Ok(output)
    }

    /// Check the relay is deployed and reachable without touching the vendor.
    /// Returns the relay's status message.
    pub async fn run_connectivity_probe(&self) -> Result<String> {
        let response = self.relay.call(&RelayRequest::probe()).await?;
        if !response.is_online() {
            return Err(Error::InvalidResponse(
                "relay did not report an online status".into(),
            ));
        }
        Ok(response.message.unwrap_or_default())
    }

    /// Save a result to `path`, downloading it first if it is remote.
    /// Returns the number of bytes written.
    pub async fn download_result(&self, output: &SwapOutput, path: impl AsRef<Path>) -> Result<usize> {
        let bytes = if output.is_inline() {
            output.decode()?
        } else {
            self.relay.fetch(&output.image).await?
        };
        tokio::fs::write(path.as_ref(), &bytes).await?;
        info!("Saved result to {}", path.as_ref().display());
        Ok(bytes.len())
    }
}
