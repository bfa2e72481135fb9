use async_trait::async_trait;

use crate::domain::activity::errors::ActivityError;
use crate::domain::activity::models::Activity;
use crate::domain::activity::models::ActivityId;
use crate::domain::activity::models::CreateActivityCommand;
use crate::domain::activity::models::UpdateActivityCommand;
use crate::domain::itinerary::models::ItineraryId;
use crate::domain::user::models::UserId;

/// Port for activity operations. Every call checks that `owner` owns the trip.
#[async_trait]
pub trait ActivityServicePort: Send + Sync + 'static {
    /// Create an activity on a day; its trip is taken from the itinerary.
    ///
    /// # Errors
    /// * `ItineraryNotFound` - Itinerary missing or on a trip of another user
    async fn create_activity(
        &self,
        owner: &UserId,
        itinerary_id: &ItineraryId,
        command: CreateActivityCommand,
    ) -> Result<Activity, ActivityError>;

    /// Activities of the day ordered by start time.
    async fn list_activities(
        &self,
        owner: &UserId,
        itinerary_id: &ItineraryId,
    ) -> Result<Vec<Activity>, ActivityError>;

    async fn get_activity(&self, owner: &UserId, id: &ActivityId)
        -> Result<Activity, ActivityError>;

    /// # Errors
    /// * `ItineraryOutsideTrip` - Target itinerary belongs to another trip
    async fn update_activity(
        &self,
        owner: &UserId,
        id: &ActivityId,
        command: UpdateActivityCommand,
    ) -> Result<Activity, ActivityError>;

    async fn delete_activity(&self, owner: &UserId, id: &ActivityId) -> Result<(), ActivityError>;
}

/// Persistence operations for activities.
#[async_trait]
pub trait ActivityRepository: Send + Sync + 'static {
    async fn create(&self, activity: Activity) -> Result<Activity, ActivityError>;

    async fn find_by_id(&self, id: &ActivityId) -> Result<Option<Activity>, ActivityError>;

    /// Ordered by start time ascending, unscheduled last.
    async fn list_by_itinerary(
        &self,
        itinerary_id: &ItineraryId,
    ) -> Result<Vec<Activity>, ActivityError>;

    async fn update(&self, activity: Activity) -> Result<Activity, ActivityError>;

    async fn delete(&self, id: &ActivityId) -> Result<(), ActivityError>;
}
