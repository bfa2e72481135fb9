use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::itinerary::models::CreateItineraryCommand;
use crate::domain::itinerary::models::Slug;
use crate::domain::trip::models::TripId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ItineraryResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_itinerary(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(trip_id): Path<String>,
    Json(body): Json<CreateItineraryRequest>,
) -> Result<ApiSuccess<ItineraryResponseData>, ApiError> {
    let trip_id = TripId::from_string(&trip_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = CreateItineraryCommand {
        slug: Slug::new(body.slug).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?,
        title: body.title,
        date: body.date,
    };

    state
        .itinerary_service
        .create_itinerary(&auth_user.user_id, &trip_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref itinerary| ApiSuccess::new(StatusCode::CREATED, itinerary.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateItineraryRequest {
    slug: String,
    title: Option<String>,
    date: NaiveDate,
}
