//! The user's photo, either remote or loaded into memory.

use std::path::Path;

use faceswap_core::data_uri;
use faceswap_core::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceImage {
    /// Already reachable by the vendor.
    Url(String),
    /// Local bytes, sent inline as a data URI.
    Inline {
        bytes: Vec<u8>,
        mime: String,
        name: Option<String>,
    },
}

impl SourceImage {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Wrap image bytes. Anything that does not sniff as an image is rejected.
    pub fn from_bytes(bytes: Vec<u8>, name: Option<String>) -> Result<Self> {
        let mime = data_uri::sniff_image_mime(&bytes).ok_or_else(|| {
            Error::Validation(format!(
                "{} is not a supported image",
                name.as_deref().unwrap_or("selected file")
            ))
        })?;
        Ok(Self::Inline {
            bytes,
            mime: mime.to_string(),
            name,
        })
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string);
        Self::from_bytes(bytes, name)
    }

    /// A representation the vendor can fetch: the URL itself, or a data URI.
    pub fn to_fetchable(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Inline { bytes, mime, .. } => data_uri::encode(mime, bytes),
        }
    }

    /// Short label for logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Inline { bytes, name, .. } => format!(
                "{} ({:.1} KB)",
                name.as_deref().unwrap_or("inline image"),
                bytes.len() as f64 / 1024.0
            ),
        }
    }
}
