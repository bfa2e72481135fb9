use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::health::DatabaseProbe;
use crate::domain::health::HealthError;

pub struct PostgresDatabaseProbe {
    pool: PgPool,
}

impl PostgresDatabaseProbe {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseProbe for PostgresDatabaseProbe {
    async fn ping(&self) -> Result<(), HealthError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| HealthError::DatabaseUnreachable(e.to_string()))
    }
}
