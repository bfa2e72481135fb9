use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchQueryError {
    #[error("Search query must not be empty")]
    Empty,

    #[error("Search query too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlaceError {
    #[error("Place ID must not be empty")]
    MissingPlaceId,

    #[error("Place name must not be empty")]
    MissingName,

    #[error("Coordinates out of range: {lat}, {lng}")]
    InvalidCoordinates { lat: String, lng: String },
}

/// Top-level error for place search and the location cache
#[derive(Debug, Clone, Error)]
pub enum LocationError {
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] SearchQueryError),

    #[error("Invalid place: {0}")]
    InvalidPlace(#[from] PlaceError),

    #[error("Places search is not configured")]
    NotConfigured,

    #[error("Places provider error: {0}")]
    Upstream(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
