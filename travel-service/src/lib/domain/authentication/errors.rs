use thiserror::Error;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::UserError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Errors of the sign-in flows.
///
/// `Token` keeps the precise validation failure for logs; the HTTP layer
/// reports every variant of it as the same "unauthorized".
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    #[error("OAuth verification failed: {0}")]
    OAuthVerificationFailed(String),

    #[error("Token rejected: {0}")]
    Token(auth::JwtError),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists(email) => AuthError::DuplicateEmail(email),
            other => AuthError::Storage(other.to_string()),
        }
    }
}

impl From<auth::JwtError> for AuthError {
    fn from(err: auth::JwtError) -> Self {
        match err {
            auth::JwtError::EncodingFailed(msg) | auth::JwtError::InvalidSecret(msg) => {
                AuthError::TokenIssuance(msg)
            }
            other => AuthError::Token(other),
        }
    }
}
