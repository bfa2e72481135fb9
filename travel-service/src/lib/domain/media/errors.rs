use thiserror::Error;

use crate::domain::activity::errors::ActivityError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MediaIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FileNameError {
    #[error("File name must not be empty")]
    Empty,

    #[error("File name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all media-related operations
#[derive(Debug, Clone, Error)]
pub enum MediaError {
    #[error("Invalid file name: {0}")]
    InvalidFileName(#[from] FileNameError),

    #[error("Uploaded file is empty")]
    EmptyFile,

    #[error("File too large: maximum {max} bytes, got {actual}")]
    FileTooLarge { max: usize, actual: usize },

    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    #[error("Storage error: {0}")]
    StorageFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ActivityError> for MediaError {
    fn from(err: ActivityError) -> Self {
        match err {
            ActivityError::NotFound(id) => MediaError::ActivityNotFound(id),
            other => MediaError::DatabaseError(other.to_string()),
        }
    }
}
