use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::user::models::DeviceToken;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn register_device(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<RegisterDeviceRequest>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let token =
        DeviceToken::new(body.token).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .user_service
        .register_device(&auth_user.user_id, token)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageResponseData::new("Device token registered"),
            )
        })
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterDeviceRequest {
    token: String,
}
