use thiserror::Error;

use crate::domain::trip::errors::TripError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItineraryIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("Slug must not be empty")]
    Empty,

    #[error("Slug too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all itinerary-related operations
#[derive(Debug, Clone, Error)]
pub enum ItineraryError {
    #[error("Invalid itinerary ID: {0}")]
    InvalidItineraryId(#[from] ItineraryIdError),

    #[error("Invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),

    #[error("Itinerary not found: {0}")]
    NotFound(String),

    #[error("Trip not found: {0}")]
    TripNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<TripError> for ItineraryError {
    fn from(err: TripError) -> Self {
        match err {
            TripError::NotFound(id) => ItineraryError::TripNotFound(id),
            other => ItineraryError::DatabaseError(other.to_string()),
        }
    }
}
