use chrono::DateTime;
use chrono::Utc;

use crate::domain::trip::models::TripId;

/// Persisted mapping from an opaque token to the trip it exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub token: String,
    pub trip_id: TripId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ShareLink {
    pub fn new(trip_id: TripId, issued: auth::IssuedShareToken) -> Self {
        Self {
            token: issued.token,
            trip_id,
            created_at: issued.created_at,
            expires_at: issued.expires_at,
        }
    }

    /// Valid strictly before `expires_at`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_validity_window() {
        let issued = auth::ShareTokenGenerator::new().issue();
        let link = ShareLink::new(TripId::new(), issued);

        assert!(link.is_valid_at(link.created_at));
        assert!(link.is_valid_at(link.expires_at - Duration::seconds(1)));
        assert!(!link.is_valid_at(link.expires_at));
        assert!(!link.is_valid_at(link.created_at + Duration::days(31)));
    }
}
