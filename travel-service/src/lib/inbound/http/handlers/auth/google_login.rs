use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::TokenPairResponseData;
use crate::inbound::http::router::AppState;

pub async fn google_login(
    State(state): State<AppState>,
    Json(body): Json<GoogleLoginRequest>,
) -> Result<ApiSuccess<TokenPairResponseData>, ApiError> {
    if body.token.trim().is_empty() {
        return Err(ApiError::UnprocessableEntity(
            "Identity token is required".to_string(),
        ));
    }

    state
        .auth_service
        .login_with_oauth(&body.token)
        .await
        .map_err(ApiError::from)
        .map(|pair| ApiSuccess::new(StatusCode::OK, pair.into()))
}

#[derive(Clone, Deserialize)]
pub struct GoogleLoginRequest {
    token: String,
}
