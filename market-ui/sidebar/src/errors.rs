use thiserror::Error;

/// Errors emitted while reading or writing persisted sidebar values.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage IO failed")]
    Io(#[from] std::io::Error),
    #[error("storage JSON failed")]
    Json(#[from] serde_json::Error),
    #[error("storage is unavailable")]
    Unavailable,
}
