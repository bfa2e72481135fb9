pub mod create_activity;
pub mod delete_activity;
pub mod get_activity;
pub mod list_activities;
pub mod update_activity;

pub use create_activity::create_activity;
pub use delete_activity::delete_activity;
pub use get_activity::get_activity;
pub use list_activities::list_activities;
pub use update_activity::update_activity;

use std::str::FromStr;

use crate::domain::activity::models::ActivityId;
use crate::domain::activity::models::ActivityStatus;
use crate::inbound::http::handlers::ApiError;

fn parse_activity_id(raw: &str) -> Result<ActivityId, ApiError> {
    ActivityId::from_string(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

fn parse_status(raw: Option<String>) -> Result<Option<ActivityStatus>, ApiError> {
    raw.map(|s| ActivityStatus::from_str(&s))
        .transpose()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))
}
