use clinic_http::{HttpError, StatusCode};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Message carried by every failed binary download
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Download failed";

/// Failure of an API call.
///
/// `Display` is always a non-empty, human-readable sentence that callers can
/// show as is.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    /// Non-2xx response on a JSON endpoint
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// Non-2xx response on a binary endpoint
    #[error("Download failed")]
    DownloadFailed { status: StatusCode },

    /// Connection, TLS, timeout, URL or header problems
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// A 2xx body that does not match the declared response type
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A downloaded document could not be written
    #[error("Failed to save {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// HTTP status behind the failure, if the server answered
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } | Self::DownloadFailed { status } => Some(*status),
            _ => None,
        }
    }

    /// Message for the end user
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether the server rejected the credentials (401)
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// Canonical reason phrase of `status`, or its numeric code when it has none
#[must_use]
pub fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.as_u16().to_string(), str::to_owned)
}

/// Pick the message for a failed JSON call.
///
/// A JSON object body yields its non-empty `message`, then its non-empty
/// `error`; anything else yields the status text.
#[must_use]
pub fn error_message(status: StatusCode, body: &[u8]) -> String {
    let from_body = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"].into_iter().find_map(|field| {
                value
                    .get(field)
                    .and_then(serde_json::Value::as_str)
                    .filter(|text| !text.is_empty())
                    .map(str::to_owned)
            })
        });
    from_body.unwrap_or_else(|| status_text(status))
}
