use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::share::errors::ShareError;
use crate::domain::share::models::ShareLink;
use crate::domain::share::ports::ShareRepository;
use crate::domain::trip::models::TripId;

pub struct PostgresShareRepository {
    pool: PgPool,
}

impl PostgresShareRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShareRepository for PostgresShareRepository {
    async fn create(&self, link: ShareLink) -> Result<ShareLink, ShareError> {
        sqlx::query(
            r#"
            INSERT INTO share_tokens (token, trip_id, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&link.token)
        .bind(link.trip_id.0)
        .bind(link.created_at)
        .bind(link.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ShareError::DatabaseError(e.to_string()))?;

        Ok(link)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<ShareLink>, ShareError> {
        let row = sqlx::query(
            r#"
            SELECT token, trip_id, created_at, expires_at
            FROM share_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ShareError::DatabaseError(e.to_string()))?;

        Ok(row.map(|r| ShareLink {
            token: r.get("token"),
            trip_id: TripId(r.get("trip_id")),
            created_at: r.get("created_at"),
            expires_at: r.get("expires_at"),
        }))
    }
}
