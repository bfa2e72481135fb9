use async_trait::async_trait;

use crate::domain::location::errors::LocationError;
use crate::domain::location::models::Location;
use crate::domain::location::models::Place;
use crate::domain::location::models::SearchQuery;

#[async_trait]
pub trait LocationServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `NotConfigured` - No places provider credentials
    /// * `Upstream` - Provider unreachable or returned an error status
    async fn search_places(&self, query: SearchQuery) -> Result<Vec<Place>, LocationError>;

    /// Return the cached location for the place, creating it on first use.
    async fn save_place(&self, place: Place) -> Result<Location, LocationError>;
}

/// External text search for places.
#[async_trait]
pub trait PlacesClient: Send + Sync + 'static {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Place>, LocationError>;
}

#[async_trait]
pub trait LocationRepository: Send + Sync + 'static {
    async fn find_by_place_id(&self, place_id: &str) -> Result<Option<Location>, LocationError>;

    /// Insert the location; an existing row with the same place id wins.
    async fn create(&self, location: Location) -> Result<Location, LocationError>;
}
