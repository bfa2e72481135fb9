use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::TokenPair;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::SignupCommand;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::authentication::ports::OAuthVerifier;
use crate::domain::user::models::AuthProvider;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Orchestrates the credential store, the OAuth verifier and token issuance.
///
/// Account creation and token issuance are two separate steps: if signing
/// fails after the insert, the account exists and the caller can log in.
pub struct AuthService<UR, OV>
where
    UR: UserRepository,
    OV: OAuthVerifier,
{
    users: Arc<UR>,
    verifier: Arc<OV>,
    authenticator: Arc<Authenticator>,
}

impl<UR, OV> AuthService<UR, OV>
where
    UR: UserRepository,
    OV: OAuthVerifier,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - Credential store
    /// * `verifier` - Third-party identity token verifier
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(users: Arc<UR>, verifier: Arc<OV>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            users,
            verifier,
            authenticator,
        }
    }

    fn issue_tokens(&self, user_id: &UserId) -> Result<TokenPair, AuthError> {
        self.authenticator
            .issue_tokens(&user_id.to_string())
            .map_err(|e| {
                tracing::error!(user_id = %user_id, error = %e, "Token issuance failed");
                AuthError::from(e)
            })
    }
}

#[async_trait]
impl<UR, OV> AuthServicePort for AuthService<UR, OV>
where
    UR: UserRepository,
    OV: OAuthVerifier,
{
    async fn signup(&self, command: SignupCommand) -> Result<TokenPair, AuthError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(password.as_str()))
                .await
                .map_err(|e| AuthError::Internal(format!("Password hashing task failed: {}", e)))?
                .map_err(|e| AuthError::Internal(format!("Password hashing failed: {}", e)))?;

        let user = User::with_password(command.email, password_hash);
        let created_user = self.users.create(user).await?;

        tracing::info!(user_id = %created_user.id, "User signed up");

        self.issue_tokens(&created_user.id)
    }

    async fn login(&self, command: LoginCommand) -> Result<TokenPair, AuthError> {
        let user = self.users.find_by_email(&command.email).await?;

        // Unknown accounts go through the same Argon2 verification as known ones.
        let stored_hash = user.as_ref().and_then(|u| u.password_hash.clone());
        let subject = user.as_ref().map(|u| u.id.to_string()).unwrap_or_default();
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;

        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, stored_hash.as_deref(), &subject)
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {}", e)))?;

        let tokens = outcome.map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                match &user {
                    None => tracing::debug!("Login rejected: unknown email"),
                    Some(u) if !u.has_password() => {
                        tracing::debug!(user_id = %u.id, "Login rejected: account has no password")
                    }
                    Some(u) => tracing::debug!(user_id = %u.id, "Login rejected: bad password"),
                }
                AuthError::InvalidCredentials
            }
            AuthenticationError::PasswordError(err) => AuthError::Internal(err.to_string()),
            AuthenticationError::JwtError(err) => AuthError::from(err),
        })?;

        let Some(user) = user else {
            return Err(AuthError::InvalidCredentials);
        };

        if let Err(e) = self.users.record_login(&user.id).await {
            tracing::warn!(user_id = %user.id, error = %e, "Failed to record login time");
        }

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(tokens)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        self.authenticator
            .refresh_access_token(refresh_token)
            .map_err(|e| {
                tracing::warn!(error = %e, "Refresh token rejected");
                AuthError::from(e)
            })
    }

    async fn login_with_oauth(&self, identity_token: &str) -> Result<TokenPair, AuthError> {
        let profile = self
            .verifier
            .verify_identity_token(identity_token)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Identity token rejected");
                e
            })?;

        let user = self
            .users
            .upsert_oauth_user(&profile, AuthProvider::Google)
            .await?;

        tracing::info!(user_id = %user.id, provider = "google", "User logged in with OAuth");

        self.issue_tokens(&user.id)
    }

    async fn authenticate(&self, access_token: &str) -> Result<UserId, AuthError> {
        let claims = self
            .authenticator
            .validate_access_token(access_token)
            .map_err(|e| {
                tracing::warn!(error = %e, "Access token rejected");
                AuthError::from(e)
            })?;

        UserId::from_string(claims.subject()).map_err(|e| {
            tracing::warn!(error = %e, "Access token subject is not a user ID");
            AuthError::Token(auth::JwtError::Malformed(e.to_string()))
        })
    }
}
