//! Error types for the face swap relay and client.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Required input missing or unusable. Surfaced to the caller as-is.
    #[error("{0}")]
    Validation(String),

    /// Deployment misconfiguration, e.g. no vendor API key.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-success answer from the vendor API.
    #[error("{message}")]
    Vendor {
        status: u16,
        message: String,
        details: String,
    },

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Network or protocol failure talking to a remote endpoint.
    #[error("{0}")]
    Transport(String),

    /// Failure envelope returned by the relay.
    #[error("{message}")]
    Relay {
        status: u16,
        message: String,
        details: Option<String>,
    },

    #[error("Invalid relay response: {0}")]
    InvalidResponse(String),

    #[error("Invalid data URI: {0}")]
    Decode(String),

    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status the relay answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::MethodNotAllowed => 405,
            Self::Vendor { status, .. } => *status,
            Self::Relay { status, .. } => *status,
            _ => 500,
        }
    }

    /// Raw diagnostic payload attached to the failure envelope, if any.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::Vendor { details, .. } => Some(details.as_str()),
            Self::Relay { details, .. } => details.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
