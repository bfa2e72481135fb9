use async_trait::async_trait;

use crate::domain::trip::errors::TripError;
use crate::domain::trip::models::CreateTripCommand;
use crate::domain::trip::models::Trip;
use crate::domain::trip::models::TripId;
use crate::domain::trip::models::UpdateTripCommand;
use crate::domain::user::models::UserId;

/// Port for trip operations performed on behalf of an authenticated user.
///
/// Trips owned by another user are reported as `NotFound`.
#[async_trait]
pub trait TripServicePort: Send + Sync + 'static {
    async fn create_trip(&self, owner: &UserId, command: CreateTripCommand)
        -> Result<Trip, TripError>;

    /// # Errors
    /// * `NotFound` - Trip does not exist or belongs to another user
    async fn get_trip(&self, owner: &UserId, id: &TripId) -> Result<Trip, TripError>;

    /// Trips of the user, most recent start date first.
    async fn list_trips(&self, owner: &UserId) -> Result<Vec<Trip>, TripError>;

    /// # Errors
    /// * `NotFound` - Trip does not exist or belongs to another user
    /// * `InvalidDates` - The update would make the trip end before it starts
    async fn update_trip(
        &self,
        owner: &UserId,
        id: &TripId,
        command: UpdateTripCommand,
    ) -> Result<Trip, TripError>;

    /// # Errors
    /// * `NotFound` - Trip does not exist or belongs to another user
    async fn delete_trip(&self, owner: &UserId, id: &TripId) -> Result<(), TripError>;
}

/// Persistence operations for trip aggregate.
#[async_trait]
pub trait TripRepository: Send + Sync + 'static {
    async fn create(&self, trip: Trip) -> Result<Trip, TripError>;

    /// # Returns
    /// Optional trip (None if not found)
    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, TripError>;

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Trip>, TripError>;

    /// # Errors
    /// * `NotFound` - Trip does not exist
    async fn update(&self, trip: Trip) -> Result<Trip, TripError>;

    /// Remove the trip together with everything scheduled under it.
    ///
    /// # Errors
    /// * `NotFound` - Trip does not exist
    async fn delete(&self, id: &TripId) -> Result<(), TripError>;
}
