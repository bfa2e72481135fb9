use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::activity::models::ActivityId;
use crate::domain::media::errors::MediaError;
use crate::domain::media::models::Media;
use crate::domain::media::models::MediaId;
use crate::domain::media::models::MediaKind;
use crate::domain::media::ports::MediaRepository;

pub struct PostgresMediaRepository {
    pool: PgPool,
}

impl PostgresMediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaRepository for PostgresMediaRepository {
    async fn create(&self, media: Media) -> Result<Media, MediaError> {
        sqlx::query(
            r#"
            INSERT INTO media (id, activity_id, url, kind, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(media.id.0)
        .bind(media.activity_id.0)
        .bind(&media.url)
        .bind(media.kind.as_str())
        .bind(media.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| MediaError::DatabaseError(e.to_string()))?;

        Ok(media)
    }

    async fn list_by_activity(&self, activity_id: &ActivityId) -> Result<Vec<Media>, MediaError> {
        let rows = sqlx::query(
            r#"
            SELECT id, activity_id, url, kind, created_at
            FROM media
            WHERE activity_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(activity_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MediaError::DatabaseError(e.to_string()))?;

        Ok(rows
            .iter()
            .map(|r| Media {
                id: MediaId(r.get("id")),
                activity_id: ActivityId(r.get("activity_id")),
                url: r.get("url"),
                kind: MediaKind::parse(r.get("kind")),
                created_at: r.get("created_at"),
            })
            .collect())
    }
}
