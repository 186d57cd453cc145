use std::time::Duration;

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a request URL was refused before anything was sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidUriKind {
    ParseError,
    /// No host, e.g. a relative `/api/...` path
    MissingAuthority,
    MissingScheme,
}

/// Failures of the HTTP client itself.
///
/// A non-2xx answer is not an error here; the caller inspects the status.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HttpError {
    // Request construction
    #[error("invalid URL '{url}': {reason}")]
    InvalidUri {
        url: String,
        kind: InvalidUriKind,
        reason: String,
    },

    #[error("scheme '{scheme}' refused: {reason}")]
    InvalidScheme { scheme: String, reason: String },

    #[error("invalid header name: {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    #[error("cannot build request: {0}")]
    RequestBuild(#[from] http::Error),

    #[error("cannot encode body: {0}")]
    Json(#[from] serde_json::Error),

    // Sending
    /// Only raised when a request timeout is configured
    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Transport(#[source] BoxError),

    #[error("TLS setup failed: {0}")]
    Tls(#[source] BoxError),

    /// The shared request queue is full
    #[error("client overloaded: request queue is full")]
    Overloaded,

    /// The queue worker is gone; the client cannot be used any more
    #[error("client unavailable: request worker stopped")]
    ServiceClosed,

    // Response
    #[error("response body exceeds {limit} bytes (got {actual})")]
    BodyTooLarge { limit: usize, actual: usize },
}

impl From<hyper::Error> for HttpError {
    fn from(err: hyper::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

impl From<hyper_util::client::legacy::Error> for HttpError {
    fn from(err: hyper_util::client::legacy::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
