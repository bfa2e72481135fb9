use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::parse_status;
use crate::domain::activity::models::ActivityName;
use crate::domain::activity::models::CreateActivityCommand;
use crate::domain::itinerary::models::ItineraryId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ActivityResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_activity(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(itinerary_id): Path<String>,
    Json(body): Json<CreateActivityRequest>,
) -> Result<ApiSuccess<ActivityResponseData>, ApiError> {
    let itinerary_id =
        ItineraryId::from_string(&itinerary_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .activity_service
        .create_activity(&auth_user.user_id, &itinerary_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref activity| ApiSuccess::new(StatusCode::CREATED, activity.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateActivityRequest {
    name: String,
    description: Option<String>,
    location: Option<String>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    kind: Option<String>,
    status: Option<String>,
}

impl CreateActivityRequest {
    fn try_into_command(self) -> Result<CreateActivityCommand, ApiError> {
        Ok(CreateActivityCommand {
            name: ActivityName::new(self.name)
                .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?,
            description: self.description,
            location: self.location,
            start_time: self.start_time,
            end_time: self.end_time,
            kind: self.kind,
            status: parse_status(self.status)?,
        })
    }
}
