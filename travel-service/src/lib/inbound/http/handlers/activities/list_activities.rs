use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::itinerary::models::ItineraryId;
use crate::inbound::http::handlers::ActivityResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_activities(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(itinerary_id): Path<String>,
) -> Result<ApiSuccess<Vec<ActivityResponseData>>, ApiError> {
    let itinerary_id =
        ItineraryId::from_string(&itinerary_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .activity_service
        .list_activities(&auth_user.user_id, &itinerary_id)
        .await
        .map_err(ApiError::from)
        .map(|activities| {
            ApiSuccess::new(StatusCode::OK, activities.iter().map(Into::into).collect())
        })
}
