use async_trait::async_trait;
use auth::TokenPair;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::SignupCommand;
use crate::domain::user::models::OAuthProfile;
use crate::domain::user::models::UserId;

/// Port for the sign-in flows.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register an email/password account and sign it in.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email already registered
    /// * `Storage` - Credential store failed
    async fn signup(&self, command: SignupCommand) -> Result<TokenPair, AuthError>;

    /// Sign in with email and password.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, account without password, or wrong password
    async fn login(&self, command: LoginCommand) -> Result<TokenPair, AuthError>;

    /// Exchange a refresh token for a new access token.
    ///
    /// # Errors
    /// * `Token` - Token invalid, expired, or not a refresh token
    async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError>;

    /// Sign in with a third-party identity token, creating the account on first use.
    ///
    /// # Errors
    /// * `OAuthVerificationFailed` - Provider rejected the token or claims are missing
    async fn login_with_oauth(&self, identity_token: &str) -> Result<TokenPair, AuthError>;

    /// Resolve the user behind an access token.
    ///
    /// # Errors
    /// * `Token` - Token invalid, expired, or not an access token
    async fn authenticate(&self, access_token: &str) -> Result<UserId, AuthError>;
}

/// Verifies identity tokens issued by an external provider.
#[async_trait]
pub trait OAuthVerifier: Send + Sync + 'static {
    /// Verify the token with the provider and project its claims.
    ///
    /// # Errors
    /// * `OAuthVerificationFailed` - Token rejected, or required claims absent
    async fn verify_identity_token(&self, token: &str) -> Result<OAuthProfile, AuthError>;
}
