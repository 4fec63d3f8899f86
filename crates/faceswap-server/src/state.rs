//! Shared application state.

use std::sync::Arc;

use faceswap_core::RelayConfig;

use crate::vendor::{FaceSwapVendor, SegmindClient};

/// Read-only state shared by every relay invocation.
pub struct AppState {
    pub config: RelayConfig,
    pub vendor: Arc<dyn FaceSwapVendor>,
}

impl AppState {
    /// State backed by the real Segmind client at `config.segmind_url`.
    pub fn new(config: RelayConfig) -> Self {
        let vendor = Arc::new(SegmindClient::new(&config.segmind_url));
        Self { config, vendor }
    }

    pub fn with_vendor(config: RelayConfig, vendor: Arc<dyn FaceSwapVendor>) -> Self {
        Self { config, vendor }
    }
}
