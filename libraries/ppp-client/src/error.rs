//! Error types for the PPP client.

use crate::result::FailureKind;
use thiserror::Error;

/// Errors that can occur while talking to the PPP backend.
///
/// These never escape the public operations: each operation converts them
/// into an [`ApiResult::Err`](crate::ApiResult) at its boundary.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Invalid base URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Failed to encode the request body
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The operation already failed; carried by [`ApiResult::decode`](crate::ApiResult::decode)
    #[error("{message}")]
    Failed { kind: FailureKind, message: String },
}

impl ClientError {
    /// Classify a transport error from reqwest.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err.to_string())
        } else if err.is_connect() {
            ClientError::ServerUnreachable(err.to_string())
        } else {
            ClientError::Request(err)
        }
    }

    /// The failure kind reported in an [`ApiResult`](crate::ApiResult).
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::Request(_) => FailureKind::Request,
            ClientError::ServerUnreachable(_) => FailureKind::Unreachable,
            ClientError::Timeout(_) => FailureKind::Timeout,
            ClientError::InvalidUrl(_) => FailureKind::InvalidUrl,
            ClientError::ParseError(_) => FailureKind::Decode,
            ClientError::Encode(_) => FailureKind::Encode,
            ClientError::Failed { kind, .. } => *kind,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
