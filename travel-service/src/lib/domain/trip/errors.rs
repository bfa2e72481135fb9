use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TripIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TripLocationError {
    #[error("Trip location must not be empty")]
    Empty,

    #[error("Trip location too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TripDatesError {
    #[error("Trip ends before it starts")]
    EndBeforeStart,
}

/// Top-level error for all trip-related operations
#[derive(Debug, Clone, Error)]
pub enum TripError {
    #[error("Invalid trip ID: {0}")]
    InvalidTripId(#[from] TripIdError),

    #[error("Invalid location: {0}")]
    InvalidLocation(#[from] TripLocationError),

    #[error("Invalid dates: {0}")]
    InvalidDates(#[from] TripDatesError),

    /// Also returned for trips owned by someone else.
    #[error("Trip not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
