use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;

/// Tokens are stateless; the client discards its pair.
pub async fn logout() -> ApiSuccess<MessageResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData::new("Logged out successfully"),
    )
}
