use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::trip::models::TripId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ItineraryResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_itineraries(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(trip_id): Path<String>,
) -> Result<ApiSuccess<Vec<ItineraryResponseData>>, ApiError> {
    let trip_id = TripId::from_string(&trip_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .itinerary_service
        .list_itineraries(&auth_user.user_id, &trip_id)
        .await
        .map_err(ApiError::from)
        .map(|itineraries| {
            ApiSuccess::new(StatusCode::OK, itineraries.iter().map(Into::into).collect())
        })
}
