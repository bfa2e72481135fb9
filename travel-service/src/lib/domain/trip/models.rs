use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::trip::errors::TripDatesError;
use crate::domain::trip::errors::TripIdError;
use crate::domain::trip::errors::TripLocationError;
use crate::domain::user::models::UserId;

/// Trip aggregate: a destination and a date range, owned by one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub owner_id: UserId,
    pub location: TripLocation,
    pub dates: TripDates,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    pub fn new(owner_id: UserId, location: TripLocation, dates: TripDates) -> Self {
        let now = Utc::now();
        Self {
            id: TripId::new(),
            owner_id,
            location,
            dates,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner_id == *user_id
    }
}

/// Trip unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TripId(pub Uuid);

impl TripId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a trip ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TripIdError> {
        Uuid::parse_str(s)
            .map(TripId)
            .map_err(|e| TripIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TripId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Free-form destination name (city, region, address).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripLocation(String);

impl TripLocation {
    const MAX_LENGTH: usize = 255;

    pub fn new(location: String) -> Result<Self, TripLocationError> {
        let location = location.trim().to_string();
        let length = location.chars().count();
        if length == 0 {
            Err(TripLocationError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(TripLocationError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(location))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Start and end of a trip; the end is never before the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripDates {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TripDates {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TripDatesError> {
        if end < start {
            return Err(TripDatesError::EndBeforeStart);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTripCommand {
    pub location: TripLocation,
    pub dates: TripDates,
}

/// Partial update; only provided fields change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTripCommand {
    pub location: Option<TripLocation>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_location_is_trimmed_and_required() {
        assert_eq!(
            TripLocation::new("  Lisbon ".to_string()).unwrap().as_str(),
            "Lisbon"
        );
        assert_eq!(
            TripLocation::new("   ".to_string()),
            Err(TripLocationError::Empty)
        );
    }

    #[test]
    fn test_dates_reject_end_before_start() {
        let start = Utc::now();

        assert!(TripDates::new(start, start).is_ok());
        assert!(TripDates::new(start, start + Duration::days(3)).is_ok());
        assert_eq!(
            TripDates::new(start, start - Duration::days(1)),
            Err(TripDatesError::EndBeforeStart)
        );
    }
}
