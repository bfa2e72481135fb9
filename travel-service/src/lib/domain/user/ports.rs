use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AuthProvider;
use crate::domain::user::models::DeviceToken;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::OAuthProfile;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for user account operations that are not part of signing in.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a push notification token for the user's device.
    ///
    /// Registering the same token again refreshes its timestamp.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn register_device(&self, user_id: &UserId, token: DeviceToken)
        -> Result<(), UserError>;
}

/// Persistence operations for user aggregate (the credential store).
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Unique constraint on email was violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Create or update the account keyed by `profile.email`.
    ///
    /// Profile and provider fields are overwritten, the email is marked
    /// verified and the last login time is set.
    ///
    /// # Returns
    /// The stored user (existing ID on update)
    async fn upsert_oauth_user(
        &self,
        profile: &OAuthProfile,
        provider: AuthProvider,
    ) -> Result<User, UserError>;

    /// Stamp the last successful login time.
    async fn record_login(&self, id: &UserId) -> Result<(), UserError>;

    /// Insert or refresh a device token for the user.
    async fn upsert_device(&self, user_id: &UserId, token: &DeviceToken)
        -> Result<(), UserError>;
}
