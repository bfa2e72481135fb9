use thiserror::Error;

/// Errors of share-link creation and resolution.
///
/// Unknown and expired tokens are deliberately the same value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("Share link not found or expired")]
    NotFoundOrExpired,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
