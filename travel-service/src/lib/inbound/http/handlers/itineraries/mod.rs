pub mod create_itinerary;
pub mod delete_itinerary;
pub mod get_itinerary;
pub mod list_itineraries;
pub mod update_itinerary;

pub use create_itinerary::create_itinerary;
pub use delete_itinerary::delete_itinerary;
pub use get_itinerary::get_itinerary;
pub use list_itineraries::list_itineraries;
pub use update_itinerary::update_itinerary;

use crate::domain::itinerary::models::ItineraryId;
use crate::inbound::http::handlers::ApiError;

fn parse_itinerary_id(raw: &str) -> Result<ItineraryId, ApiError> {
    ItineraryId::from_string(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}
