use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::location::errors::LocationError;
use crate::domain::location::models::Location;
use crate::domain::location::ports::LocationRepository;

pub struct PostgresLocationRepository {
    pool: PgPool,
}

impl PostgresLocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_location(row: &PgRow) -> Location {
        Location {
            id: row.get("id"),
            name: row.get("name"),
            address: row.get("address"),
            latitude: row.get("latitude"),
            longitude: row.get("longitude"),
            google_place_id: row.get("google_place_id"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl LocationRepository for PostgresLocationRepository {
    async fn find_by_place_id(&self, place_id: &str) -> Result<Option<Location>, LocationError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, address, latitude, longitude, google_place_id, created_at
            FROM locations
            WHERE google_place_id = $1
            "#,
        )
        .bind(place_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| LocationError::DatabaseError(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_location))
    }

    async fn create(&self, location: Location) -> Result<Location, LocationError> {
        // A concurrent save of the same place resolves to the row already stored.
        let row = sqlx::query(
            r#"
            INSERT INTO locations (id, name, address, latitude, longitude, google_place_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (google_place_id) DO UPDATE SET google_place_id = EXCLUDED.google_place_id
            RETURNING id, name, address, latitude, longitude, google_place_id, created_at
            "#,
        )
        .bind(location.id)
        .bind(&location.name)
        .bind(&location.address)
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(&location.google_place_id)
        .bind(location.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| LocationError::DatabaseError(e.to_string()))?;

        Ok(Self::row_to_location(&row))
    }
}
