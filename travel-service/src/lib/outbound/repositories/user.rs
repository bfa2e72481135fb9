use std::str::FromStr;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AuthProvider;
use crate::domain::user::models::DeviceToken;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::OAuthProfile;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &PgRow) -> Result<User, UserError> {
        let email = row
            .get::<Option<String>, _>("email")
            .map(EmailAddress::new)
            .transpose()?;
        let auth_provider = AuthProvider::from_str(row.get::<&str, _>("auth_provider"))?;

        Ok(User {
            id: UserId(row.get("id")),
            email,
            email_verified: row.get("email_verified"),
            password_hash: row.get("password_hash"),
            full_name: row.get("full_name"),
            avatar_url: row.get("avatar_url"),
            auth_provider,
            provider_user_id: row.get("provider_user_id"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
            last_login_at: row.get("last_login_at"),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let email = user.email.as_ref().map(|e| e.as_str());

        sqlx::query(
            r#"
            INSERT INTO users (id, email, email_verified, password_hash, full_name, avatar_url,
                               auth_provider, provider_user_id, created_at, updated_at, last_login_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(user.id.0)
        .bind(email)
        .bind(user.email_verified)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(&user.avatar_url)
        .bind(user.auth_provider.as_str())
        .bind(&user.provider_user_id)
        .bind(user.created_at)
        .bind(user.updated_at)
        .bind(user.last_login_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
                    return UserError::EmailAlreadyExists(email.unwrap_or_default().to_string());
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, email_verified, password_hash, full_name, avatar_url,
                   auth_provider, provider_user_id, created_at, updated_at, last_login_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn upsert_oauth_user(
        &self,
        profile: &OAuthProfile,
        provider: AuthProvider,
    ) -> Result<User, UserError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (id, email, email_verified, full_name, avatar_url,
                               auth_provider, provider_user_id, last_login_at)
            VALUES ($1, $2, TRUE, $3, $4, $5, $6, NOW())
            ON CONFLICT (email) DO UPDATE SET
                email_verified = TRUE,
                full_name = EXCLUDED.full_name,
                avatar_url = EXCLUDED.avatar_url,
                auth_provider = EXCLUDED.auth_provider,
                provider_user_id = EXCLUDED.provider_user_id,
                updated_at = NOW(),
                last_login_at = NOW()
            RETURNING id, email, email_verified, password_hash, full_name, avatar_url,
                      auth_provider, provider_user_id, created_at, updated_at, last_login_at
            "#,
        )
        .bind(UserId::new().0)
        .bind(profile.email.as_str())
        .bind(&profile.full_name)
        .bind(&profile.avatar_url)
        .bind(provider.as_str())
        .bind(&profile.subject)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Self::row_to_user(&row)
    }

    async fn record_login(&self, id: &UserId) -> Result<(), UserError> {
        sqlx::query(
            r#"
            UPDATE users
            SET last_login_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn upsert_device(&self, user_id: &UserId, token: &DeviceToken) -> Result<(), UserError> {
        sqlx::query(
            r#"
            INSERT INTO user_devices (user_id, device_token, last_updated)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id, device_token) DO UPDATE SET last_updated = NOW()
            "#,
        )
        .bind(user_id.0)
        .bind(token.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
