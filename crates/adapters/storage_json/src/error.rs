//! Storage-specific error type wrapping file and JSON errors.

use sensorpad_domain::error::SensorPadError;

/// Errors originating from the flat-file JSON storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing a log file failed.
    #[error("log file IO error")]
    Io(#[from] std::io::Error),

    /// A log file did not contain a valid JSON array of records.
    #[error("log file JSON error")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for SensorPadError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
