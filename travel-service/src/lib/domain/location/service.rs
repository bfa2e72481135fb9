use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::location::errors::LocationError;
use crate::domain::location::models::Location;
use crate::domain::location::models::Place;
use crate::domain::location::models::SearchQuery;
use crate::domain::location::ports::LocationRepository;
use crate::domain::location::ports::LocationServicePort;
use crate::domain::location::ports::PlacesClient;

pub struct LocationService<LR, PC>
where
    LR: LocationRepository,
    PC: PlacesClient,
{
    locations: Arc<LR>,
    places: Arc<PC>,
}

impl<LR, PC> LocationService<LR, PC>
where
    LR: LocationRepository,
    PC: PlacesClient,
{
    pub fn new(locations: Arc<LR>, places: Arc<PC>) -> Self {
        Self { locations, places }
    }
}

#[async_trait]
impl<LR, PC> LocationServicePort for LocationService<LR, PC>
where
    LR: LocationRepository,
    PC: PlacesClient,
{
    async fn search_places(&self, query: SearchQuery) -> Result<Vec<Place>, LocationError> {
        let places = self.places.search(&query).await.inspect_err(|e| {
            tracing::warn!(query = %query.as_str(), error = %e, "Places search failed");
        })?;

        tracing::debug!(query = %query.as_str(), results = places.len(), "Places search");

        Ok(places)
    }

    async fn save_place(&self, place: Place) -> Result<Location, LocationError> {
        if let Some(existing) = self.locations.find_by_place_id(&place.place_id).await? {
            return Ok(existing);
        }

        let created = self.locations.create(Location::from(place)).await?;
        tracing::info!(location_id = %created.id, name = %created.name, "Location cached");

        Ok(created)
    }
}
