use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum HealthError {
    #[error("Database unreachable: {0}")]
    DatabaseUnreachable(String),
}

/// Liveness check against the backing database.
#[async_trait]
pub trait DatabaseProbe: Send + Sync + 'static {
    async fn ping(&self) -> Result<(), HealthError>;
}
