/// Key-value storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed for key {key}: {reason}")]
    Io { key: String, reason: String },

    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },
}
