use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::trip::errors::TripError;
use crate::domain::trip::models::Trip;
use crate::domain::trip::models::TripDates;
use crate::domain::trip::models::TripId;
use crate::domain::trip::models::TripLocation;
use crate::domain::trip::ports::TripRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTripRepository {
    pool: PgPool,
}

impl PostgresTripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_trip(row: &PgRow) -> Result<Trip, TripError> {
        Ok(Trip {
            id: TripId(row.get("id")),
            owner_id: UserId(row.get("owner_id")),
            location: TripLocation::new(row.get("location"))?,
            dates: TripDates::new(row.get("start_date"), row.get("end_date"))?,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl TripRepository for PostgresTripRepository {
    async fn create(&self, trip: Trip) -> Result<Trip, TripError> {
        sqlx::query(
            r#"
            INSERT INTO trips (id, owner_id, location, start_date, end_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(trip.id.0)
        .bind(trip.owner_id.0)
        .bind(trip.location.as_str())
        .bind(trip.dates.start())
        .bind(trip.dates.end())
        .bind(trip.created_at)
        .bind(trip.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TripError::DatabaseError(e.to_string()))?;

        Ok(trip)
    }

    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, TripError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, location, start_date, end_date, created_at, updated_at
            FROM trips
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TripError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_trip).transpose()
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Trip>, TripError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, location, start_date, end_date, created_at, updated_at
            FROM trips
            WHERE owner_id = $1
            ORDER BY start_date DESC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TripError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_trip).collect()
    }

    async fn update(&self, trip: Trip) -> Result<Trip, TripError> {
        let result = sqlx::query(
            r#"
            UPDATE trips
            SET location = $2, start_date = $3, end_date = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(trip.id.0)
        .bind(trip.location.as_str())
        .bind(trip.dates.start())
        .bind(trip.dates.end())
        .bind(trip.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TripError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TripError::NotFound(trip.id.to_string()));
        }

        Ok(trip)
    }

    async fn delete(&self, id: &TripId) -> Result<(), TripError> {
        sqlx::query(
            r#"
            DELETE FROM trips
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| TripError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
