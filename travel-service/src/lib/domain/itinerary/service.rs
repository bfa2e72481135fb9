use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::itinerary::errors::ItineraryError;
use crate::domain::itinerary::models::CreateItineraryCommand;
use crate::domain::itinerary::models::Itinerary;
use crate::domain::itinerary::models::ItineraryId;
use crate::domain::itinerary::models::UpdateItineraryCommand;
use crate::domain::itinerary::ports::ItineraryRepository;
use crate::domain::itinerary::ports::ItineraryServicePort;
use crate::domain::trip::models::TripId;
use crate::domain::trip::ports::TripRepository;
use crate::domain::user::models::UserId;

pub struct ItineraryService<IR, TR>
where
    IR: ItineraryRepository,
    TR: TripRepository,
{
    itineraries: Arc<IR>,
    trips: Arc<TR>,
}

impl<IR, TR> ItineraryService<IR, TR>
where
    IR: ItineraryRepository,
    TR: TripRepository,
{
    pub fn new(itineraries: Arc<IR>, trips: Arc<TR>) -> Self {
        Self { itineraries, trips }
    }

    async fn ensure_trip_owner(
        &self,
        owner: &UserId,
        trip_id: &TripId,
    ) -> Result<(), ItineraryError> {
        self.trips
            .find_by_id(trip_id)
            .await?
            .filter(|trip| trip.is_owned_by(owner))
            .map(|_| ())
            .ok_or(ItineraryError::TripNotFound(trip_id.to_string()))
    }

    async fn owned_itinerary(
        &self,
        owner: &UserId,
        id: &ItineraryId,
    ) -> Result<Itinerary, ItineraryError> {
        let itinerary = self
            .itineraries
            .find_by_id(id)
            .await?
            .ok_or(ItineraryError::NotFound(id.to_string()))?;

        self.ensure_trip_owner(owner, &itinerary.trip_id)
            .await
            .map_err(|e| match e {
                ItineraryError::TripNotFound(_) => ItineraryError::NotFound(id.to_string()),
                other => other,
            })?;

        Ok(itinerary)
    }
}

#[async_trait]
impl<IR, TR> ItineraryServicePort for ItineraryService<IR, TR>
where
    IR: ItineraryRepository,
    TR: TripRepository,
{
    async fn create_itinerary(
        &self,
        owner: &UserId,
        trip_id: &TripId,
        command: CreateItineraryCommand,
    ) -> Result<Itinerary, ItineraryError> {
        self.ensure_trip_owner(owner, trip_id).await?;

        let created = self
            .itineraries
            .create(Itinerary::new(*trip_id, command))
            .await?;

        tracing::info!(itinerary_id = %created.id, trip_id = %trip_id, "Itinerary created");

        Ok(created)
    }

    async fn list_itineraries(
        &self,
        owner: &UserId,
        trip_id: &TripId,
    ) -> Result<Vec<Itinerary>, ItineraryError> {
        self.ensure_trip_owner(owner, trip_id).await?;
        self.itineraries.list_by_trip(trip_id).await
    }

    async fn get_itinerary(
        &self,
        owner: &UserId,
        id: &ItineraryId,
    ) -> Result<Itinerary, ItineraryError> {
        self.owned_itinerary(owner, id).await
    }

    async fn update_itinerary(
        &self,
        owner: &UserId,
        id: &ItineraryId,
        command: UpdateItineraryCommand,
    ) -> Result<Itinerary, ItineraryError> {
        let mut itinerary = self.owned_itinerary(owner, id).await?;

        if let Some(slug) = command.slug {
            itinerary.slug = slug;
        }
        if let Some(title) = command.title {
            itinerary.title = Some(title);
        }
        if let Some(date) = command.date {
            itinerary.date = date;
        }
        itinerary.updated_at = Utc::now();

        self.itineraries.update(itinerary).await
    }

    async fn delete_itinerary(
        &self,
        owner: &UserId,
        id: &ItineraryId,
    ) -> Result<(), ItineraryError> {
        self.owned_itinerary(owner, id).await?;
        self.itineraries.delete(id).await
    }
}
