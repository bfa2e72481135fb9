use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::parse_activity_id;
use crate::inbound::http::handlers::ActivityResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_activity(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(activity_id): Path<String>,
) -> Result<ApiSuccess<ActivityResponseData>, ApiError> {
    let activity_id = parse_activity_id(&activity_id)?;

    state
        .activity_service
        .get_activity(&auth_user.user_id, &activity_id)
        .await
        .map_err(ApiError::from)
        .map(|ref activity| ApiSuccess::new(StatusCode::OK, activity.into()))
}
