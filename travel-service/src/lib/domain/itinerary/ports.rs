use async_trait::async_trait;

use crate::domain::itinerary::errors::ItineraryError;
use crate::domain::itinerary::models::CreateItineraryCommand;
use crate::domain::itinerary::models::Itinerary;
use crate::domain::itinerary::models::ItineraryId;
use crate::domain::itinerary::models::UpdateItineraryCommand;
use crate::domain::trip::models::TripId;
use crate::domain::user::models::UserId;

/// Port for itinerary operations. Every call checks that `owner` owns the trip.
#[async_trait]
pub trait ItineraryServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `TripNotFound` - Trip does not exist or belongs to another user
    async fn create_itinerary(
        &self,
        owner: &UserId,
        trip_id: &TripId,
        command: CreateItineraryCommand,
    ) -> Result<Itinerary, ItineraryError>;

    /// Days of the trip in date order.
    async fn list_itineraries(
        &self,
        owner: &UserId,
        trip_id: &TripId,
    ) -> Result<Vec<Itinerary>, ItineraryError>;

    async fn get_itinerary(
        &self,
        owner: &UserId,
        id: &ItineraryId,
    ) -> Result<Itinerary, ItineraryError>;

    async fn update_itinerary(
        &self,
        owner: &UserId,
        id: &ItineraryId,
        command: UpdateItineraryCommand,
    ) -> Result<Itinerary, ItineraryError>;

    async fn delete_itinerary(&self, owner: &UserId, id: &ItineraryId)
        -> Result<(), ItineraryError>;
}

/// Persistence operations for itineraries.
#[async_trait]
pub trait ItineraryRepository: Send + Sync + 'static {
    async fn create(&self, itinerary: Itinerary) -> Result<Itinerary, ItineraryError>;

    async fn find_by_id(&self, id: &ItineraryId) -> Result<Option<Itinerary>, ItineraryError>;

    /// Ordered by date ascending.
    async fn list_by_trip(&self, trip_id: &TripId) -> Result<Vec<Itinerary>, ItineraryError>;

    async fn update(&self, itinerary: Itinerary) -> Result<Itinerary, ItineraryError>;

    /// Activities of the day are kept, detached from it.
    async fn delete(&self, id: &ItineraryId) -> Result<(), ItineraryError>;
}
