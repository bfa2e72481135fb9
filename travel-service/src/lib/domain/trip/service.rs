use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::trip::errors::TripError;
use crate::domain::trip::models::CreateTripCommand;
use crate::domain::trip::models::Trip;
use crate::domain::trip::models::TripDates;
use crate::domain::trip::models::TripId;
use crate::domain::trip::models::UpdateTripCommand;
use crate::domain::trip::ports::TripRepository;
use crate::domain::trip::ports::TripServicePort;
use crate::domain::user::models::UserId;

pub struct TripService<TR>
where
    TR: TripRepository,
{
    repository: Arc<TR>,
}

impl<TR> TripService<TR>
where
    TR: TripRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }

    async fn owned_trip(&self, owner: &UserId, id: &TripId) -> Result<Trip, TripError> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|trip| trip.is_owned_by(owner))
            .ok_or(TripError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<TR> TripServicePort for TripService<TR>
where
    TR: TripRepository,
{
    async fn create_trip(
        &self,
        owner: &UserId,
        command: CreateTripCommand,
    ) -> Result<Trip, TripError> {
        let trip = Trip::new(*owner, command.location, command.dates);
        let created = self.repository.create(trip).await?;

        tracing::info!(trip_id = %created.id, owner_id = %owner, "Trip created");

        Ok(created)
    }

    async fn get_trip(&self, owner: &UserId, id: &TripId) -> Result<Trip, TripError> {
        self.owned_trip(owner, id).await
    }

    async fn list_trips(&self, owner: &UserId) -> Result<Vec<Trip>, TripError> {
        self.repository.list_by_owner(owner).await
    }

    async fn update_trip(
        &self,
        owner: &UserId,
        id: &TripId,
        command: UpdateTripCommand,
    ) -> Result<Trip, TripError> {
        let mut trip = self.owned_trip(owner, id).await?;

        if let Some(location) = command.location {
            trip.location = location;
        }

        trip.dates = TripDates::new(
            command.start_date.unwrap_or(trip.dates.start()),
            command.end_date.unwrap_or(trip.dates.end()),
        )?;
        trip.updated_at = Utc::now();

        self.repository.update(trip).await
    }

    async fn delete_trip(&self, owner: &UserId, id: &TripId) -> Result<(), TripError> {
        self.owned_trip(owner, id).await?;
        self.repository.delete(id).await?;

        tracing::info!(trip_id = %id, owner_id = %owner, "Trip deleted");

        Ok(())
    }
}
