use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::location::errors::PlaceError;
use crate::domain::location::errors::SearchQueryError;

/// A place as reported by the places provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    /// # Errors
    /// * `MissingPlaceId` / `MissingName` - Blank identifier or name
    /// * `InvalidCoordinates` - Latitude or longitude outside the globe
    pub fn new(
        place_id: String,
        name: String,
        address: String,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, PlaceError> {
        let place_id = place_id.trim().to_string();
        let name = name.trim().to_string();

        if place_id.is_empty() {
            return Err(PlaceError::MissingPlaceId);
        }
        if name.is_empty() {
            return Err(PlaceError::MissingName);
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(PlaceError::InvalidCoordinates {
                lat: latitude.to_string(),
                lng: longitude.to_string(),
            });
        }

        Ok(Self {
            place_id,
            name,
            address,
            latitude,
            longitude,
        })
    }
}

/// A place saved locally so activities can reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub google_place_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Place> for Location {
    fn from(place: Place) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: place.name,
            address: place.address,
            latitude: place.latitude,
            longitude: place.longitude,
            google_place_id: Some(place.place_id),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    const MAX_LENGTH: usize = 200;

    pub fn new(query: &str) -> Result<Self, SearchQueryError> {
        let query = query.trim();
        let length = query.chars().count();
        if length == 0 {
            Err(SearchQueryError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(SearchQueryError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(query.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
