use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::parse_itinerary_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ItineraryResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_itinerary(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(itinerary_id): Path<String>,
) -> Result<ApiSuccess<ItineraryResponseData>, ApiError> {
    let itinerary_id = parse_itinerary_id(&itinerary_id)?;

    state
        .itinerary_service
        .get_itinerary(&auth_user.user_id, &itinerary_id)
        .await
        .map_err(ApiError::from)
        .map(|ref itinerary| ApiSuccess::new(StatusCode::OK, itinerary.into()))
}
