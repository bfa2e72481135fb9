pub mod create_trip;
pub mod delete_trip;
pub mod get_trip;
pub mod list_trips;
pub mod share_trip;
pub mod update_trip;

pub use create_trip::create_trip;
pub use delete_trip::delete_trip;
pub use get_trip::get_trip;
pub use list_trips::list_trips;
pub use share_trip::share_trip;
pub use update_trip::update_trip;

use crate::domain::trip::models::TripId;
use crate::inbound::http::handlers::ApiError;

fn parse_trip_id(raw: &str) -> Result<TripId, ApiError> {
    TripId::from_string(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}
