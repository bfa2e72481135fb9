use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::parse_trip_id;
use crate::domain::trip::models::TripLocation;
use crate::domain::trip::models::UpdateTripCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::TripResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_trip(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(trip_id): Path<String>,
    Json(body): Json<UpdateTripRequest>,
) -> Result<ApiSuccess<TripResponseData>, ApiError> {
    let trip_id = parse_trip_id(&trip_id)?;

    let location = body
        .location
        .map(TripLocation::new)
        .transpose()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = UpdateTripCommand {
        location,
        start_date: body.start_date,
        end_date: body.end_date,
    };

    state
        .trip_service
        .update_trip(&auth_user.user_id, &trip_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref trip| ApiSuccess::new(StatusCode::OK, trip.into()))
}

/// Absent fields keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTripRequest {
    location: Option<String>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
}
