//! Error types for the QR client.
//!
//! # Design
//! Failures are split by where they happen: before any network activity
//! (`EncodingError`), on the wire (`TransportError`), or at the service
//! (`RemoteError`). The service has no structured error schema, so a remote
//! failure carries only the status code and the message the service sent.

use std::error::Error as StdError;

/// Errors returned by [`Client`](crate::Client).
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum ApiError {
    /// The request could not be turned into query parameters.
    #[error("encoding failed: {0}")]
    EncodingError(String),

    /// The HTTP round-trip itself failed.
    #[error(transparent)]
    TransportError(#[from] TransportError),

    /// The service answered with a non-2xx status. `message` is the response
    /// body text, or the status text when the body was empty.
    #[error("{message}")]
    RemoteError { status: u16, message: String },
}

impl ApiError {
    /// HTTP status of a remote failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RemoteError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A failure reported by a [`Transport`](crate::Transport): DNS, connection
/// refused, TLS, or a timeout if the transport enforces one.
#[derive(Debug, thiserror::Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        TransportError::with_source(err.to_string(), err)
    }
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::with_source(err.to_string(), err)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
