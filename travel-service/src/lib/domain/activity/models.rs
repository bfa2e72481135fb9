use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::activity::errors::ActivityError;
use crate::domain::activity::errors::ActivityIdError;
use crate::domain::activity::errors::ActivityNameError;
use crate::domain::activity::errors::ActivityStatusError;
use crate::domain::itinerary::models::ItineraryId;
use crate::domain::trip::models::TripId;

/// Something planned during a trip, usually attached to one day.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: ActivityId,
    pub trip_id: TripId,
    pub itinerary_id: Option<ItineraryId>,
    pub name: ActivityName,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Free-form category ("museum", "flight", ...)
    pub kind: Option<String>,
    pub status: ActivityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    /// Build an activity for an itinerary of `trip_id`.
    ///
    /// # Errors
    /// * `InvalidTimeRange` - End time before start time
    pub fn new(
        trip_id: TripId,
        itinerary_id: ItineraryId,
        command: CreateActivityCommand,
    ) -> Result<Self, ActivityError> {
        ensure_time_range(command.start_time, command.end_time)?;

        let now = Utc::now();
        Ok(Self {
            id: ActivityId::new(),
            trip_id,
            itinerary_id: Some(itinerary_id),
            name: command.name,
            description: command.description,
            location: command.location,
            start_time: command.start_time,
            end_time: command.end_time,
            kind: command.kind,
            status: command.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Checks that an activity never ends before it starts.
pub fn ensure_time_range(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), ActivityError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(ActivityError::InvalidTimeRange),
        _ => Ok(()),
    }
}

/// Activity unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivityId(pub Uuid);

impl ActivityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an activity ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ActivityIdError> {
        Uuid::parse_str(s)
            .map(ActivityId)
            .map_err(|e| ActivityIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ActivityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityName(String);

impl ActivityName {
    const MAX_LENGTH: usize = 255;

    pub fn new(name: String) -> Result<Self, ActivityNameError> {
        let name = name.trim().to_string();
        let length = name.chars().count();
        if length == 0 {
            Err(ActivityNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(ActivityNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityStatus {
    #[default]
    Planned,
    Confirmed,
    Completed,
    Cancelled,
}

impl ActivityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Planned => "planned",
            ActivityStatus::Confirmed => "confirmed",
            ActivityStatus::Completed => "completed",
            ActivityStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for ActivityStatus {
    type Err = ActivityStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(ActivityStatus::Planned),
            "confirmed" => Ok(ActivityStatus::Confirmed),
            "completed" => Ok(ActivityStatus::Completed),
            "cancelled" => Ok(ActivityStatus::Cancelled),
            other => Err(ActivityStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateActivityCommand {
    pub name: ActivityName,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub kind: Option<String>,
    /// Defaults to `Planned`
    pub status: Option<ActivityStatus>,
}

/// Partial update; only provided fields change.
///
/// Setting `itinerary_id` moves the activity to another day of the same trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateActivityCommand {
    pub itinerary_id: Option<ItineraryId>,
    pub name: Option<ActivityName>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub kind: Option<String>,
    pub status: Option<ActivityStatus>,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn command() -> CreateActivityCommand {
        CreateActivityCommand {
            name: ActivityName::new("Tram 28".to_string()).unwrap(),
            description: None,
            location: None,
            start_time: None,
            end_time: None,
            kind: None,
            status: None,
        }
    }

    #[test]
    fn test_status_defaults_to_planned() {
        let activity = Activity::new(TripId::new(), ItineraryId::new(), command()).unwrap();
        assert_eq!(activity.status, ActivityStatus::Planned);
    }

    #[test]
    fn test_rejects_end_before_start() {
        let start = Utc::now();
        let result = Activity::new(
            TripId::new(),
            ItineraryId::new(),
            CreateActivityCommand {
                start_time: Some(start),
                end_time: Some(start - Duration::hours(1)),
                ..command()
            },
        );
        assert!(matches!(result, Err(ActivityError::InvalidTimeRange)));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            "cancelled".parse::<ActivityStatus>(),
            Ok(ActivityStatus::Cancelled)
        );
        assert!("someday".parse::<ActivityStatus>().is_err());
    }
}
