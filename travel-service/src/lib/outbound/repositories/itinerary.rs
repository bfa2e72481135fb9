use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::itinerary::errors::ItineraryError;
use crate::domain::itinerary::models::Itinerary;
use crate::domain::itinerary::models::ItineraryId;
use crate::domain::itinerary::models::Slug;
use crate::domain::itinerary::ports::ItineraryRepository;
use crate::domain::trip::models::TripId;

pub struct PostgresItineraryRepository {
    pool: PgPool,
}

impl PostgresItineraryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_itinerary(row: &PgRow) -> Result<Itinerary, ItineraryError> {
        Ok(Itinerary {
            id: ItineraryId(row.get("id")),
            trip_id: TripId(row.get("trip_id")),
            slug: Slug::new(row.get("slug"))?,
            title: row.get("title"),
            date: row.get("date"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl ItineraryRepository for PostgresItineraryRepository {
    async fn create(&self, itinerary: Itinerary) -> Result<Itinerary, ItineraryError> {
        sqlx::query(
            r#"
            INSERT INTO itineraries (id, trip_id, slug, title, date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(itinerary.id.0)
        .bind(itinerary.trip_id.0)
        .bind(itinerary.slug.as_str())
        .bind(&itinerary.title)
        .bind(itinerary.date)
        .bind(itinerary.created_at)
        .bind(itinerary.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ItineraryError::DatabaseError(e.to_string()))?;

        Ok(itinerary)
    }

    async fn find_by_id(&self, id: &ItineraryId) -> Result<Option<Itinerary>, ItineraryError> {
        let row = sqlx::query(
            r#"
            SELECT id, trip_id, slug, title, date, created_at, updated_at
            FROM itineraries
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ItineraryError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_itinerary).transpose()
    }

    async fn list_by_trip(&self, trip_id: &TripId) -> Result<Vec<Itinerary>, ItineraryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, trip_id, slug, title, date, created_at, updated_at
            FROM itineraries
            WHERE trip_id = $1
            ORDER BY date ASC
            "#,
        )
        .bind(trip_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ItineraryError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_itinerary).collect()
    }

    async fn update(&self, itinerary: Itinerary) -> Result<Itinerary, ItineraryError> {
        let result = sqlx::query(
            r#"
            UPDATE itineraries
            SET slug = $2, title = $3, date = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(itinerary.id.0)
        .bind(itinerary.slug.as_str())
        .bind(&itinerary.title)
        .bind(itinerary.date)
        .bind(itinerary.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ItineraryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ItineraryError::NotFound(itinerary.id.to_string()));
        }

        Ok(itinerary)
    }

    async fn delete(&self, id: &ItineraryId) -> Result<(), ItineraryError> {
        sqlx::query(
            r#"
            DELETE FROM itineraries
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ItineraryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
