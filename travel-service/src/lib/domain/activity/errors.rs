use thiserror::Error;

use crate::domain::itinerary::errors::ItineraryError;
use crate::domain::trip::errors::TripError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivityIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivityNameError {
    #[error("Activity name must not be empty")]
    Empty,

    #[error("Activity name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivityStatusError {
    #[error("Unknown activity status: {0}")]
    Unknown(String),
}

/// Top-level error for all activity-related operations
#[derive(Debug, Clone, Error)]
pub enum ActivityError {
    #[error("Invalid activity ID: {0}")]
    InvalidActivityId(#[from] ActivityIdError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] ActivityNameError),

    #[error("Invalid status: {0}")]
    InvalidStatus(#[from] ActivityStatusError),

    #[error("Activity ends before it starts")]
    InvalidTimeRange,

    #[error("Activity not found: {0}")]
    NotFound(String),

    #[error("Itinerary not found: {0}")]
    ItineraryNotFound(String),

    #[error("Itinerary {0} belongs to a different trip")]
    ItineraryOutsideTrip(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ItineraryError> for ActivityError {
    fn from(err: ItineraryError) -> Self {
        match err {
            ItineraryError::NotFound(id) => ActivityError::ItineraryNotFound(id),
            other => ActivityError::DatabaseError(other.to_string()),
        }
    }
}

impl From<TripError> for ActivityError {
    fn from(err: TripError) -> Self {
        ActivityError::DatabaseError(err.to_string())
    }
}
