use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::domain::location::errors::LocationError;
use crate::domain::location::models::Place;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::LocationResponseData;
use crate::inbound::http::handlers::PlaceData;
use crate::inbound::http::router::AppState;

/// Persist a search result. Saving the same place twice returns the stored row.
pub async fn save_place(
    State(state): State<AppState>,
    Json(body): Json<PlaceData>,
) -> Result<ApiSuccess<LocationResponseData>, ApiError> {
    let place = Place::new(
        body.place_id,
        body.name,
        body.formatted_address,
        body.geometry.location.lat,
        body.geometry.location.lng,
    )
    .map_err(LocationError::from)?;

    state
        .location_service
        .save_place(place)
        .await
        .map_err(ApiError::from)
        .map(|ref location| ApiSuccess::new(StatusCode::OK, location.into()))
}
