use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The stored value under `key` could not be read or parsed.
    #[error("Could not load contacts from '{key}': {reason}")]
    StorageRead { key: String, reason: String },

    /// The collection could not be written under `key`.
    #[error("Could not save contacts to '{key}': {reason}")]
    StorageWrite { key: String, reason: String },
}

impl AppError {
    pub fn read_failure(key: &str, err: impl ToString) -> Self {
        AppError::StorageRead {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }

    pub fn write_failure(key: &str, err: impl ToString) -> Self {
        AppError::StorageWrite {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }

    pub fn is_storage_read(&self) -> bool {
        matches!(self, AppError::StorageRead { .. })
    }

    pub fn is_storage_write(&self) -> bool {
        matches!(self, AppError::StorageWrite { .. })
    }
}
