/// Failures below the HTTP layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// No HTTP response was obtained: DNS, connect, TLS, timeout, or body read.
    #[error("backend unreachable: {reason}")]
    Unreachable { reason: String },

    /// The request could not be built locally. Nothing was sent.
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },
}

impl TransportError {
    /// Whether this failure means the backend could not be reached.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}
