//! Authentication utilities library
//!
//! Provides the security primitives of the travel backend:
//! - Password hashing (Argon2id)
//! - Typed access/refresh JWTs with a strict HS256 allowlist
//! - Share tokens for public trip links
//! - Authentication coordination
//!
//! Services define their own ports and adapt these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Access and Refresh Tokens
//! ```
//! use auth::{TokenKind, TokenService};
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", "travel-app").unwrap();
//! let pair = tokens.issue_pair("user123").unwrap();
//!
//! let claims = tokens.validate_access(&pair.access_token).unwrap();
//! assert_eq!(claims.kind, TokenKind::Access);
//!
//! let access = tokens.refresh_access_token(&pair.refresh_token).unwrap();
//! assert!(tokens.refresh_access_token(&access).is_err());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher, TokenService};
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", "travel-app").unwrap();
//! let auth = Authenticator::new(PasswordHasher::new(), tokens);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue tokens
//! let pair = auth.authenticate("password123", Some(&hash), "user123").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_access_token(&pair.access_token).unwrap();
//! assert_eq!(claims.subject(), "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod share;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenKind;
pub use jwt::TokenPair;
pub use jwt::TokenService;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use share::IssuedShareToken;
pub use share::ShareTokenGenerator;
