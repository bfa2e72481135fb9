use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::TripResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_trips(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<TripResponseData>>, ApiError> {
    state
        .trip_service
        .list_trips(&auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|trips| ApiSuccess::new(StatusCode::OK, trips.iter().map(Into::into).collect()))
}
