use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::parse_itinerary_id;
use crate::domain::itinerary::models::Slug;
use crate::domain::itinerary::models::UpdateItineraryCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ItineraryResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_itinerary(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(itinerary_id): Path<String>,
    Json(body): Json<UpdateItineraryRequest>,
) -> Result<ApiSuccess<ItineraryResponseData>, ApiError> {
    let itinerary_id = parse_itinerary_id(&itinerary_id)?;

    let command = UpdateItineraryCommand {
        slug: body
            .slug
            .map(Slug::new)
            .transpose()
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?,
        title: body.title,
        date: body.date,
    };

    state
        .itinerary_service
        .update_itinerary(&auth_user.user_id, &itinerary_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref itinerary| ApiSuccess::new(StatusCode::OK, itinerary.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItineraryRequest {
    slug: Option<String>,
    title: Option<String>,
    date: Option<NaiveDate>,
}
