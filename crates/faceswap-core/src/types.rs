//! Wire types shared by the relay and its clients.

use serde::{Deserialize, Serialize};

/// Value of both request fields that marks a connectivity probe.
pub const PROBE_SENTINEL: &str = "test";

/// `function_status` reported by a probe answer.
pub const STATUS_ONLINE: &str = "online";

/// Body of `POST /` on the relay.
///
/// Fields are optional on the wire so the relay can answer a missing field
/// with a validation error instead of a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayRequest {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub gif_url: Option<String>,
}

impl RelayRequest {
    pub fn new(image_url: impl Into<String>, gif_url: impl Into<String>) -> Self {
        Self {
            image_url: Some(image_url.into()),
            gif_url: Some(gif_url.into()),
        }
    }

    pub fn probe() -> Self {
        Self::new(PROBE_SENTINEL, PROBE_SENTINEL)
    }

    pub fn is_probe(&self) -> bool {
        self.image_url.as_deref() == Some(PROBE_SENTINEL)
            && self.gif_url.as_deref() == Some(PROBE_SENTINEL)
    }

    /// Both URLs, if present and non-empty.
    pub fn urls(&self) -> Option<(&str, &str)> {
        let image = self.image_url.as_deref().filter(|s| !s.is_empty())?;
        let gif = self.gif_url.as_deref().filter(|s| !s.is_empty())?;
        Some((image, gif))
    }
}

/// JSON envelope of every relay answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_status: Option<String>,
    /// Unix timestamp in milliseconds at which the swap finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<i64>,
}

impl RelayResponse {
    pub fn swapped(image: String, processing_time: i64) -> Self {
        Self {
            success: true,
            image: Some(image),
            message: Some("Face swap completed successfully".into()),
            processing_time: Some(processing_time),
            ..Default::default()
        }
    }

    pub fn online() -> Self {
        Self {
            success: true,
            message: Some("Face swap relay is working".into()),
            function_status: Some(STATUS_ONLINE.into()),
            ..Default::default()
        }
    }

    pub fn failure(error: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            details,
            ..Default::default()
        }
    }

    pub fn is_online(&self) -> bool {
        self.success && self.function_status.as_deref() == Some(STATUS_ONLINE)
    }
}

/// Request body sent to the vendor face swap endpoint.
///
/// Only the two URLs come from the caller; everything else is fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapParams {
    pub face_image: String,
    pub target_image: String,
    pub face_restore: bool,
    pub face_upsample: bool,
    pub upscale: u32,
    pub codeformer_fidelity: f64,
}

impl SwapParams {
    pub fn new(face_image: impl Into<String>, target_image: impl Into<String>) -> Self {
        Self {
            face_image: face_image.into(),
            target_image: target_image.into(),
            face_restore: true,
            face_upsample: true,
            upscale: 1,
            codeformer_fidelity: 0.8,
        }
    }
}
