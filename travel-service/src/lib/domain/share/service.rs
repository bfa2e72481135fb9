use std::sync::Arc;

use async_trait::async_trait;
use auth::ShareTokenGenerator;
use chrono::Utc;

use crate::domain::share::errors::ShareError;
use crate::domain::share::models::ShareLink;
use crate::domain::share::ports::ShareRepository;
use crate::domain::share::ports::ShareServicePort;
use crate::domain::trip::models::Trip;
use crate::domain::trip::models::TripId;
use crate::domain::trip::ports::TripRepository;

pub struct ShareService<SR, TR>
where
    SR: ShareRepository,
    TR: TripRepository,
{
    shares: Arc<SR>,
    trips: Arc<TR>,
    generator: ShareTokenGenerator,
}

impl<SR, TR> ShareService<SR, TR>
where
    SR: ShareRepository,
    TR: TripRepository,
{
    pub fn new(shares: Arc<SR>, trips: Arc<TR>) -> Self {
        Self {
            shares,
            trips,
            generator: ShareTokenGenerator::new(),
        }
    }
}

#[async_trait]
impl<SR, TR> ShareServicePort for ShareService<SR, TR>
where
    SR: ShareRepository,
    TR: TripRepository,
{
    async fn create_share_link(&self, trip_id: &TripId) -> Result<ShareLink, ShareError> {
        let link = ShareLink::new(*trip_id, self.generator.issue());
        let created = self.shares.create(link).await?;

        tracing::info!(
            trip_id = %trip_id,
            expires_at = %created.expires_at,
            "Share link created"
        );

        Ok(created)
    }

    async fn resolve_share_link(&self, token: &str) -> Result<TripId, ShareError> {
        self.shares
            .find_by_token(token)
            .await?
            .filter(|link| link.is_valid_at(Utc::now()))
            .map(|link| link.trip_id)
            .ok_or(ShareError::NotFoundOrExpired)
    }

    async fn get_shared_trip(&self, token: &str) -> Result<Trip, ShareError> {
        let trip_id = self.resolve_share_link(token).await?;

        self.trips
            .find_by_id(&trip_id)
            .await
            .map_err(|e| ShareError::DatabaseError(e.to_string()))?
            .ok_or(ShareError::NotFoundOrExpired)
    }
}
