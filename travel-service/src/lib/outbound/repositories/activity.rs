use std::str::FromStr;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::activity::errors::ActivityError;
use crate::domain::activity::models::Activity;
use crate::domain::activity::models::ActivityId;
use crate::domain::activity::models::ActivityName;
use crate::domain::activity::models::ActivityStatus;
use crate::domain::activity::ports::ActivityRepository;
use crate::domain::itinerary::models::ItineraryId;
use crate::domain::trip::models::TripId;

pub struct PostgresActivityRepository {
    pool: PgPool,
}

impl PostgresActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_activity(row: &PgRow) -> Result<Activity, ActivityError> {
        Ok(Activity {
            id: ActivityId(row.get("id")),
            trip_id: TripId(row.get("trip_id")),
            itinerary_id: row.get::<Option<Uuid>, _>("itinerary_id").map(ItineraryId),
            name: ActivityName::new(row.get("name"))?,
            description: row.get("description"),
            location: row.get("location"),
            start_time: row.get("start_time"),
            end_time: row.get("end_time"),
            kind: row.get("type"),
            status: ActivityStatus::from_str(row.get::<&str, _>("status"))?,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn create(&self, activity: Activity) -> Result<Activity, ActivityError> {
        sqlx::query(
            r#"
            INSERT INTO activities (id, trip_id, itinerary_id, name, description, location,
                                    start_time, end_time, type, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(activity.id.0)
        .bind(activity.trip_id.0)
        .bind(activity.itinerary_id.map(|id| id.0))
        .bind(activity.name.as_str())
        .bind(&activity.description)
        .bind(&activity.location)
        .bind(activity.start_time)
        .bind(activity.end_time)
        .bind(&activity.kind)
        .bind(activity.status.as_str())
        .bind(activity.created_at)
        .bind(activity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ActivityError::DatabaseError(e.to_string()))?;

        Ok(activity)
    }

    async fn find_by_id(&self, id: &ActivityId) -> Result<Option<Activity>, ActivityError> {
        let row = sqlx::query(
            r#"
            SELECT id, trip_id, itinerary_id, name, description, location,
                   start_time, end_time, type, status, created_at, updated_at
            FROM activities
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ActivityError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_activity).transpose()
    }

    async fn list_by_itinerary(
        &self,
        itinerary_id: &ItineraryId,
    ) -> Result<Vec<Activity>, ActivityError> {
        let rows = sqlx::query(
            r#"
            SELECT id, trip_id, itinerary_id, name, description, location,
                   start_time, end_time, type, status, created_at, updated_at
            FROM activities
            WHERE itinerary_id = $1
            ORDER BY start_time ASC NULLS LAST, created_at ASC
            "#,
        )
        .bind(itinerary_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ActivityError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_activity).collect()
    }

    async fn update(&self, activity: Activity) -> Result<Activity, ActivityError> {
        let result = sqlx::query(
            r#"
            UPDATE activities
            SET itinerary_id = $2, name = $3, description = $4, location = $5,
                start_time = $6, end_time = $7, type = $8, status = $9, updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(activity.id.0)
        .bind(activity.itinerary_id.map(|id| id.0))
        .bind(activity.name.as_str())
        .bind(&activity.description)
        .bind(&activity.location)
        .bind(activity.start_time)
        .bind(activity.end_time)
        .bind(&activity.kind)
        .bind(activity.status.as_str())
        .bind(activity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ActivityError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ActivityError::NotFound(activity.id.to_string()));
        }

        Ok(activity)
    }

    async fn delete(&self, id: &ActivityId) -> Result<(), ActivityError> {
        sqlx::query(
            r#"
            DELETE FROM activities
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ActivityError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
