use async_trait::async_trait;

use crate::domain::share::errors::ShareError;
use crate::domain::share::models::ShareLink;
use crate::domain::trip::models::Trip;
use crate::domain::trip::models::TripId;

/// Port for public trip links.
///
/// Does not check who owns the trip; callers establish that first.
#[async_trait]
pub trait ShareServicePort: Send + Sync + 'static {
    /// Mint and store a new 30-day link for the trip.
    async fn create_share_link(&self, trip_id: &TripId) -> Result<ShareLink, ShareError>;

    /// # Errors
    /// * `NotFoundOrExpired` - Token unknown or past its expiry
    async fn resolve_share_link(&self, token: &str) -> Result<TripId, ShareError>;

    /// Resolve the token and load the trip behind it.
    ///
    /// # Errors
    /// * `NotFoundOrExpired` - Token unknown, expired, or its trip was deleted
    async fn get_shared_trip(&self, token: &str) -> Result<Trip, ShareError>;
}

/// Persistence operations for share links.
#[async_trait]
pub trait ShareRepository: Send + Sync + 'static {
    async fn create(&self, link: ShareLink) -> Result<ShareLink, ShareError>;

    /// Look a token up regardless of expiry.
    async fn find_by_token(&self, token: &str) -> Result<Option<ShareLink>, ShareError>;
}
