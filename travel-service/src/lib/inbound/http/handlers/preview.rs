use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::SharedTripResponseData;
use crate::inbound::http::router::AppState;

/// Public read-only view of a shared trip.
pub async fn get_preview(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<ApiSuccess<SharedTripResponseData>, ApiError> {
    state
        .share_service
        .get_shared_trip(&token)
        .await
        .map_err(ApiError::from)
        .map(|ref trip| ApiSuccess::new(StatusCode::OK, trip.into()))
}
