use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::parse_itinerary_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_itinerary(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(itinerary_id): Path<String>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let itinerary_id = parse_itinerary_id(&itinerary_id)?;

    state
        .itinerary_service
        .delete_itinerary(&auth_user.user_id, &itinerary_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageResponseData::new("Itinerary deleted")))
}
