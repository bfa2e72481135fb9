use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::DeviceToken;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user account operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_device(
        &self,
        user_id: &UserId,
        token: DeviceToken,
    ) -> Result<(), UserError> {
        self.repository.upsert_device(user_id, &token).await?;
        tracing::debug!(user_id = %user_id, "Device token registered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::AuthProvider;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::OAuthProfile;
    use crate::domain::user::models::User;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
            async fn upsert_oauth_user(&self, profile: &OAuthProfile, provider: AuthProvider) -> Result<User, UserError>;
            async fn record_login(&self, id: &UserId) -> Result<(), UserError>;
            async fn upsert_device(&self, user_id: &UserId, token: &DeviceToken) -> Result<(), UserError>;
        }
    }

    #[tokio::test]
    async fn test_register_device_success() {
        let mut repository = MockTestUserRepository::new();
        let user_id = UserId::new();
        let token = DeviceToken::new("fcm-token-1".to_string()).unwrap();

        repository
            .expect_upsert_device()
            .with(eq(user_id), eq(token.clone()))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UserService::new(Arc::new(repository));

        let result = service.register_device(&user_id, token).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_device_database_error() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_upsert_device()
            .times(1)
            .returning(|_, _| Err(UserError::DatabaseError("connection reset".to_string())));

        let service = UserService::new(Arc::new(repository));

        let result = service
            .register_device(
                &UserId::new(),
                DeviceToken::new("fcm-token-1".to_string()).unwrap(),
            )
            .await;
        assert!(matches!(result, Err(UserError::DatabaseError(_))));
    }
}
