use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::parse_trip_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Mint a public preview link for a trip the caller owns.
pub async fn share_trip(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(trip_id): Path<String>,
) -> Result<ApiSuccess<ShareTripResponseData>, ApiError> {
    let trip_id = parse_trip_id(&trip_id)?;

    let trip = state
        .trip_service
        .get_trip(&auth_user.user_id, &trip_id)
        .await?;

    let link = state.share_service.create_share_link(&trip.id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ShareTripResponseData {
            url: format!("/api/v1/preview/{}", link.token),
            share_token: link.token,
            expires_at: link.expires_at,
        },
    ))
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareTripResponseData {
    pub share_token: String,
    pub url: String,
    pub expires_at: DateTime<Utc>,
}
