//! Vendor face swap API client.
//!
//! The relay talks to the vendor through [`FaceSwapVendor`] so the handler
//! can be exercised against doubles. [`SegmindClient`] is the production
//! implementation.

use faceswap_core::{Error, Result, SwapParams};
use futures::future::BoxFuture;
use reqwest::Client;
use tracing::debug;

/// Raw vendor answer: HTTP status plus the undecoded body.
#[derive(Debug, Clone)]
pub struct VendorReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl VendorReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One outbound face swap call.
///
/// Implementations return `Err` only for transport failures; any HTTP answer,
/// successful or not, comes back as a [`VendorReply`].
pub trait FaceSwapVendor: Send + Sync {
    fn face_swap<'a>(&'a self, api_key: &'a str, params: SwapParams)
        -> BoxFuture<'a, Result<VendorReply>>;
}

/// Segmind face swap v2 client.
pub struct SegmindClient {
    client: Client,
    url: String,
}

impl SegmindClient {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
        }
    }
}

impl FaceSwapVendor for SegmindClient {
    fn face_swap<'a>(
        &'a self,
        api_key: &'a str,
        params: SwapParams,
    ) -> BoxFuture<'a, Result<VendorReply>> {
        Box::pin(async move {
            debug!("Calling Segmind at {}", self.url);

            let response = self
                .client
                .post(&self.url)
                .header("x-api-key", api_key)
                .header("Content-Type", "application/json")
                .json(&params)
                .send()
                .await
                .map_err(|e| Error::Transport(format!("Segmind request failed: {}", e)))?;

            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| Error::Transport(format!("Failed to read Segmind response: {}", e)))?;

            Ok(VendorReply {
                status,
                body: body.to_vec(),
            })
        })
    }
}
