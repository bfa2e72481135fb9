use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::activity::models::ActivityId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MediaResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_media(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(activity_id): Path<String>,
) -> Result<ApiSuccess<Vec<MediaResponseData>>, ApiError> {
    let activity_id =
        ActivityId::from_string(&activity_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .media_service
        .list_media(&auth_user.user_id, &activity_id)
        .await
        .map_err(ApiError::from)
        .map(|media| ApiSuccess::new(StatusCode::OK, media.iter().map(Into::into).collect()))
}
