use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::activity::errors::ActivityError;
use crate::domain::activity::models::ensure_time_range;
use crate::domain::activity::models::Activity;
use crate::domain::activity::models::ActivityId;
use crate::domain::activity::models::CreateActivityCommand;
use crate::domain::activity::models::UpdateActivityCommand;
use crate::domain::activity::ports::ActivityRepository;
use crate::domain::activity::ports::ActivityServicePort;
use crate::domain::itinerary::models::Itinerary;
use crate::domain::itinerary::models::ItineraryId;
use crate::domain::itinerary::ports::ItineraryRepository;
use crate::domain::trip::models::TripId;
use crate::domain::trip::ports::TripRepository;
use crate::domain::user::models::UserId;

pub struct ActivityService<AR, IR, TR>
where
    AR: ActivityRepository,
    IR: ItineraryRepository,
    TR: TripRepository,
{
    activities: Arc<AR>,
    itineraries: Arc<IR>,
    trips: Arc<TR>,
}

impl<AR, IR, TR> ActivityService<AR, IR, TR>
where
    AR: ActivityRepository,
    IR: ItineraryRepository,
    TR: TripRepository,
{
    pub fn new(activities: Arc<AR>, itineraries: Arc<IR>, trips: Arc<TR>) -> Self {
        Self {
            activities,
            itineraries,
            trips,
        }
    }

    async fn owns_trip(&self, owner: &UserId, trip_id: &TripId) -> Result<bool, ActivityError> {
        Ok(self
            .trips
            .find_by_id(trip_id)
            .await?
            .is_some_and(|trip| trip.is_owned_by(owner)))
    }

    async fn owned_itinerary(
        &self,
        owner: &UserId,
        id: &ItineraryId,
    ) -> Result<Itinerary, ActivityError> {
        let not_found = || ActivityError::ItineraryNotFound(id.to_string());

        let itinerary = self.itineraries.find_by_id(id).await?.ok_or_else(not_found)?;
        if !self.owns_trip(owner, &itinerary.trip_id).await? {
            return Err(not_found());
        }

        Ok(itinerary)
    }

    async fn owned_activity(
        &self,
        owner: &UserId,
        id: &ActivityId,
    ) -> Result<Activity, ActivityError> {
        let not_found = || ActivityError::NotFound(id.to_string());

        let activity = self.activities.find_by_id(id).await?.ok_or_else(not_found)?;
        if !self.owns_trip(owner, &activity.trip_id).await? {
            return Err(not_found());
        }

        Ok(activity)
    }
}

#[async_trait]
impl<AR, IR, TR> ActivityServicePort for ActivityService<AR, IR, TR>
where
    AR: ActivityRepository,
    IR: ItineraryRepository,
    TR: TripRepository,
{
    async fn create_activity(
        &self,
        owner: &UserId,
        itinerary_id: &ItineraryId,
        command: CreateActivityCommand,
    ) -> Result<Activity, ActivityError> {
        let itinerary = self.owned_itinerary(owner, itinerary_id).await?;

        let activity = Activity::new(itinerary.trip_id, itinerary.id, command)?;
        let created = self.activities.create(activity).await?;

        tracing::info!(
            activity_id = %created.id,
            itinerary_id = %itinerary_id,
            "Activity created"
        );

        Ok(created)
    }

    async fn list_activities(
        &self,
        owner: &UserId,
        itinerary_id: &ItineraryId,
    ) -> Result<Vec<Activity>, ActivityError> {
        self.owned_itinerary(owner, itinerary_id).await?;
        self.activities.list_by_itinerary(itinerary_id).await
    }

    async fn get_activity(
        &self,
        owner: &UserId,
        id: &ActivityId,
    ) -> Result<Activity, ActivityError> {
        self.owned_activity(owner, id).await
    }

    async fn update_activity(
        &self,
        owner: &UserId,
        id: &ActivityId,
        command: UpdateActivityCommand,
    ) -> Result<Activity, ActivityError> {
        let mut activity = self.owned_activity(owner, id).await?;

        if let Some(itinerary_id) = command.itinerary_id {
            let target = self
                .itineraries
                .find_by_id(&itinerary_id)
                .await?
                .ok_or(ActivityError::ItineraryNotFound(itinerary_id.to_string()))?;
            if target.trip_id != activity.trip_id {
                return Err(ActivityError::ItineraryOutsideTrip(itinerary_id.to_string()));
            }
            activity.itinerary_id = Some(itinerary_id);
        }

        if let Some(name) = command.name {
            activity.name = name;
        }
        if let Some(description) = command.description {
            activity.description = Some(description);
        }
        if let Some(location) = command.location {
            activity.location = Some(location);
        }
        if let Some(start_time) = command.start_time {
            activity.start_time = Some(start_time);
        }
        if let Some(end_time) = command.end_time {
            activity.end_time = Some(end_time);
        }
        if let Some(kind) = command.kind {
            activity.kind = Some(kind);
        }
        if let Some(status) = command.status {
            activity.status = status;
        }

        ensure_time_range(activity.start_time, activity.end_time)?;
        activity.updated_at = Utc::now();

        self.activities.update(activity).await
    }

    async fn delete_activity(&self, owner: &UserId, id: &ActivityId) -> Result<(), ActivityError> {
        self.owned_activity(owner, id).await?;
        self.activities.delete(id).await
    }
}
