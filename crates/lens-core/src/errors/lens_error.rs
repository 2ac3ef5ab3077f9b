use serde_json::Value;

use super::{ConfigError, StorageError};

/// Top-level error type surfaced by the client.
///
/// Transport failures and recoverable 401s never appear here: the pipeline
/// absorbs them. Only application errors, the terminal logged-out signal,
/// and local failures propagate.
#[derive(Debug, thiserror::Error)]
pub enum LensError {
    /// The backend answered with a non-2xx status.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// The session could not be renewed after a 401. The caller must send the
    /// user back to the login entry point.
    #[error("session expired, please sign in again")]
    SessionExpired,

    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("failed to decode response: {reason}")]
    Decode { reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LensError {
    /// Build an application error from a status code and raw response body.
    pub fn api(status: u16, body: &[u8]) -> Self {
        Self::Api {
            status,
            detail: error_detail(status, body),
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// HTTP status for application errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LensError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode {
            reason: e.to_string(),
        }
    }
}

/// Extract the server-supplied error message from a response body.
///
/// A string `detail` is used as-is; any other `detail` value (validation
/// errors come back as arrays) is rendered as JSON. Bodies without a usable
/// `detail` fall back to `Request failed: <status>`.
pub fn error_detail(status: u16, body: &[u8]) -> String {
    let detail = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned());

    match detail {
        Some(Value::String(s)) if !s.is_empty() => s,
        Some(Value::Null) | Some(Value::String(_)) | None => format!("Request failed: {status}"),
        Some(other) => other.to_string(),
    }
}

/// Result alias used across the client.
pub type LensResult<T> = Result<T, LensError>;
