use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::itinerary::errors::ItineraryIdError;
use crate::domain::itinerary::errors::SlugError;
use crate::domain::trip::models::TripId;

/// One day of a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub id: ItineraryId,
    pub trip_id: TripId,
    pub slug: Slug,
    pub title: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Itinerary {
    pub fn new(trip_id: TripId, command: CreateItineraryCommand) -> Self {
        let now = Utc::now();
        Self {
            id: ItineraryId::new(),
            trip_id,
            slug: command.slug,
            title: command.title,
            date: command.date,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Itinerary unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItineraryId(pub Uuid);

impl ItineraryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an itinerary ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ItineraryIdError> {
        Uuid::parse_str(s)
            .map(ItineraryId)
            .map_err(|e| ItineraryIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ItineraryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItineraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Short human-readable key of a day, e.g. `day-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    const MAX_LENGTH: usize = 100;

    pub fn new(slug: String) -> Result<Self, SlugError> {
        let slug = slug.trim().to_string();
        let length = slug.chars().count();
        if length == 0 {
            Err(SlugError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(slug))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateItineraryCommand {
    pub slug: Slug,
    pub title: Option<String>,
    pub date: NaiveDate,
}

/// Partial update; only provided fields change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateItineraryCommand {
    pub slug: Option<Slug>,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
}
