use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::trip::errors::TripDatesError;
use crate::domain::trip::errors::TripLocationError;
use crate::domain::trip::models::CreateTripCommand;
use crate::domain::trip::models::TripDates;
use crate::domain::trip::models::TripLocation;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::TripResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_trip(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTripRequest>,
) -> Result<ApiSuccess<TripResponseData>, ApiError> {
    state
        .trip_service
        .create_trip(&auth_user.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref trip| ApiSuccess::new(StatusCode::CREATED, trip.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTripRequest {
    location: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateTripRequestError {
    #[error("Invalid location: {0}")]
    Location(#[from] TripLocationError),

    #[error("Invalid dates: {0}")]
    Dates(#[from] TripDatesError),
}

impl CreateTripRequest {
    fn try_into_command(self) -> Result<CreateTripCommand, ParseCreateTripRequestError> {
        let location = TripLocation::new(self.location)?;
        let dates = TripDates::new(self.start_date, self.end_date)?;
        Ok(CreateTripCommand { location, dates })
    }
}

impl From<ParseCreateTripRequestError> for ApiError {
    fn from(err: ParseCreateTripRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
