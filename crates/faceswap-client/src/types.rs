//! Request, progress and result types for one swap attempt.

use faceswap_core::data_uri;
use faceswap_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::source::SourceImage;

/// Coarse stage of a swap attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Uploading,
    Processing,
    Completed,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uploading => write!(f, "uploading"),
            Self::Processing => write!(f, "processing"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// One progress milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub stage: Stage,
    pub percent: u8,
    pub message: String,
}

impl Progress {
    pub fn new(stage: Stage, percent: u8, message: impl Into<String>) -> Self {
        Self {
            stage,
            percent,
            message: message.into(),
        }
    }
}

/// Inputs of one swap attempt. Cannot exist without both inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    source: SourceImage,
    target: String,
}

impl SwapRequest {
    pub fn new(source: Option<SourceImage>, target: Option<String>) -> Result<Self> {
        match (source, target.filter(|t| !t.trim().is_empty())) {
            (Some(source), Some(target)) => Ok(Self { source, target }),
            _ => Err(Error::Validation(
                "Both a photo and a target GIF are required".into(),
            )),
        }
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// A successful swap: the image reference and the relay's message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOutput {
    /// `data:` URI or remote URL of the swapped image.
    pub image: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<i64>,
}

impl SwapOutput {
    pub fn is_inline(&self) -> bool {
        data_uri::is_data_uri(&self.image)
    }

    /// Bytes of an inline result. Remote results must be downloaded.
    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(data_uri::decode(&self.image)?.bytes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

/// Final result of an attempt as the front end sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapResult {
    Success(SwapOutput),
    Failure { message: String },
}

impl SwapResult {
    pub fn outcome(&self) -> Outcome {
        match self {
            Self::Success(_) => Outcome::Success,
            Self::Failure { .. } => Outcome::Failure,
        }
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Success(output) => Some(&output.image),
            Self::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(output) => &output.message,
            Self::Failure { message } => message,
        }
    }
}
