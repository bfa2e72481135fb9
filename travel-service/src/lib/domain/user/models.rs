use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::errors::DeviceTokenError;
use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::UserError;
use crate::domain::user::errors::UserIdError;

/// User aggregate entity.
///
/// An account always has at least one way to sign in: a password hash, an
/// OAuth identity, or both once a password account has been linked to a
/// provider. Accounts are never hard-deleted.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Option<EmailAddress>,
    pub email_verified: bool,
    pub password_hash: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub auth_provider: AuthProvider,
    pub provider_user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build a new email/password account.
    ///
    /// # Arguments
    /// * `email` - Validated email address
    /// * `password_hash` - PHC digest produced by the password hasher
    pub fn with_password(email: EmailAddress, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email: Some(email),
            email_verified: false,
            password_hash: Some(password_hash),
            full_name: None,
            avatar_url: None,
            auth_provider: AuthProvider::Email,
            provider_user_id: None,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Build a new account from a verified OAuth identity.
    pub fn from_oauth(profile: &OAuthProfile, provider: AuthProvider) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email: Some(profile.email.clone()),
            email_verified: true,
            password_hash: None,
            full_name: profile.full_name.clone(),
            avatar_url: profile.avatar_url.clone(),
            auth_provider: provider,
            provider_user_id: Some(profile.subject.clone()),
            created_at: now,
            updated_at: now,
            last_login_at: Some(now),
        }
    }

    /// Overwrite provider-owned fields with the latest identity claims.
    pub fn link_oauth(&mut self, profile: &OAuthProfile, provider: AuthProvider) {
        let now = Utc::now();
        self.full_name = profile.full_name.clone();
        self.avatar_url = profile.avatar_url.clone();
        self.provider_user_id = Some(profile.subject.clone());
        self.auth_provider = provider;
        self.email_verified = true;
        self.updated_at = now;
        self.last_login_at = Some(now);
    }

    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_string();
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// How the account was last authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProvider {
    Email,
    Google,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Email => "email",
            AuthProvider::Google => "google",
        }
    }
}

impl FromStr for AuthProvider {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(AuthProvider::Email),
            "google" => Ok(AuthProvider::Google),
            other => Err(UserError::InvalidProvider(other.to_string())),
        }
    }
}

/// Identity asserted by an external provider after token verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthProfile {
    pub email: EmailAddress,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    /// Provider's stable subject identifier
    pub subject: String,
}

/// Push notification token of one of the user's devices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceToken(String);

impl DeviceToken {
    const MAX_LENGTH: usize = 512;

    pub fn new(token: String) -> Result<Self, DeviceTokenError> {
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(DeviceTokenError::Empty);
        }
        if token.len() > Self::MAX_LENGTH {
            return Err(DeviceTokenError::TooLong {
                max: Self::MAX_LENGTH,
                actual: token.len(),
            });
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> OAuthProfile {
        OAuthProfile {
            email: EmailAddress::new("bob@example.com".to_string()).unwrap(),
            full_name: Some("Bob".to_string()),
            avatar_url: Some("https://example.com/bob.png".to_string()),
            subject: "google-sub-1".to_string(),
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(EmailAddress::new("alice@example.com".to_string()).is_ok());
        assert_eq!(
            EmailAddress::new("  alice@example.com ".to_string())
                .unwrap()
                .as_str(),
            "alice@example.com"
        );
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }

    #[test]
    fn test_password_account_has_credentials() {
        let email = EmailAddress::new("alice@example.com".to_string()).unwrap();
        let user = User::with_password(email, "$argon2id$...".to_string());

        assert!(user.has_password());
        assert_eq!(user.auth_provider, AuthProvider::Email);
        assert!(user.provider_user_id.is_none());
    }

    #[test]
    fn test_link_oauth_keeps_password() {
        let email = EmailAddress::new("bob@example.com".to_string()).unwrap();
        let mut user = User::with_password(email, "$argon2id$...".to_string());

        user.link_oauth(&profile(), AuthProvider::Google);

        assert!(user.has_password());
        assert!(user.email_verified);
        assert_eq!(user.auth_provider, AuthProvider::Google);
        assert_eq!(user.provider_user_id.as_deref(), Some("google-sub-1"));
        assert_eq!(user.full_name.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_provider_round_trip() {
        assert_eq!("google".parse::<AuthProvider>().unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::Email.as_str(), "email");
        assert!("github".parse::<AuthProvider>().is_err());
    }

    #[test]
    fn test_device_token_validation() {
        assert_eq!(DeviceToken::new("   ".to_string()), Err(DeviceTokenError::Empty));
        assert!(DeviceToken::new("x".repeat(600)).is_err());
        assert_eq!(DeviceToken::new(" abc ".to_string()).unwrap().as_str(), "abc");
    }
}
