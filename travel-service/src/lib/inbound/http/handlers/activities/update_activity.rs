use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::parse_activity_id;
use super::parse_status;
use crate::domain::activity::models::ActivityName;
use crate::domain::activity::models::UpdateActivityCommand;
use crate::domain::itinerary::models::ItineraryId;
use crate::inbound::http::handlers::ActivityResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_activity(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(activity_id): Path<String>,
    Json(body): Json<UpdateActivityRequest>,
) -> Result<ApiSuccess<ActivityResponseData>, ApiError> {
    let activity_id = parse_activity_id(&activity_id)?;

    state
        .activity_service
        .update_activity(&auth_user.user_id, &activity_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref activity| ApiSuccess::new(StatusCode::OK, activity.into()))
}

/// Absent fields keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateActivityRequest {
    itinerary_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    kind: Option<String>,
    status: Option<String>,
}

impl UpdateActivityRequest {
    fn try_into_command(self) -> Result<UpdateActivityCommand, ApiError> {
        let itinerary_id = self
            .itinerary_id
            .map(|id| ItineraryId::from_string(&id))
            .transpose()
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
        let name = self
            .name
            .map(ActivityName::new)
            .transpose()
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

        Ok(UpdateActivityCommand {
            itinerary_id,
            name,
            description: self.description,
            location: self.location,
            start_time: self.start_time,
            end_time: self.end_time,
            kind: self.kind,
            status: parse_status(self.status)?,
        })
    }
}
