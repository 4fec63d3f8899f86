//! Classification of vendor API failures into user-facing messages.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Known vendor failure causes. Unrecognized statuses are `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorFailure {
    InvalidApiKey,
    InsufficientCredits,
    InvalidInput,
    RateLimited,
    Other,
}

impl VendorFailure {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::InvalidApiKey,
            402 => Self::InsufficientCredits,
            422 => Self::InvalidInput,
            429 => Self::RateLimited,
            _ => Self::Other,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidApiKey => "Invalid Segmind API key",
            Self::InsufficientCredits => "Insufficient credits in Segmind account",
            Self::InvalidInput => "Invalid input - check if images contain clear faces",
            Self::RateLimited => "Rate limit exceeded - please wait and try again",
            Self::Other => "Face swap processing failed",
        }
    }

    /// Build the error relayed back for a vendor answer with `status`.
    pub fn into_error(self, status: u16, details: String) -> Error {
        Error::Vendor {
            status,
            message: self.message().to_string(),
            details,
        }
    }
}

impl std::fmt::Display for VendorFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(VendorFailure::from_status(401), VendorFailure::InvalidApiKey);
        assert_eq!(VendorFailure::from_status(402), VendorFailure::InsufficientCredits);
        assert_eq!(VendorFailure::from_status(422), VendorFailure::InvalidInput);
        assert_eq!(VendorFailure::from_status(429), VendorFailure::RateLimited);
    }

    #[test]
    fn test_unknown_statuses_are_generic() {
        for status in [400, 403, 404, 500, 502, 503, 0] {
            assert_eq!(VendorFailure::from_status(status), VendorFailure::Other);
        }
        assert_eq!(VendorFailure::Other.message(), "Face swap processing failed");
    }

    #[test]
    fn test_into_error_keeps_status_and_body() {
        let err = VendorFailure::from_status(401).into_error(401, "bad key".into());
        assert_eq!(err.status_code(), 401);
        assert!(err.to_string().contains("Invalid"));
        assert!(err.to_string().contains("API key"));
        assert_eq!(err.details(), Some("bad key"));
    }
}
