use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Distinguishes short-lived request credentials from long-lived refresh credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Fixed validity window of a token of this kind.
    pub fn lifetime(&self) -> Duration {
        match self {
            TokenKind::Access => Duration::minutes(15),
            TokenKind::Refresh => Duration::days(7),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims carried by every token minted by this crate.
///
/// `exp` is always `iat + kind.lifetime()`; use [`Claims::issue`] rather than
/// building the struct by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    #[serde(rename = "type")]
    pub kind: TokenKind,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    pub iss: String,
}

impl Claims {
    /// Build claims for `subject` issued at `issued_at`.
    ///
    /// # Arguments
    /// * `subject` - User ID the token is minted for
    /// * `kind` - Access or refresh
    /// * `issuer` - Value of the `iss` claim
    /// * `issued_at` - Instant the token is issued
    pub fn issue(
        subject: impl Into<String>,
        kind: TokenKind,
        issuer: impl Into<String>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: subject.into(),
            kind,
            iat,
            exp: iat + kind.lifetime().num_seconds(),
            iss: issuer.into(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Expiry is strict: a token is no longer valid at the second it expires.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_derived_from_kind() {
        let now = Utc::now();

        let access = Claims::issue("user123", TokenKind::Access, "travel-app", now);
        assert_eq!(access.exp - access.iat, 15 * 60);

        let refresh = Claims::issue("user123", TokenKind::Refresh, "travel-app", now);
        assert_eq!(refresh.exp - refresh.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_kind_serialized_as_type_claim() {
        let claims = Claims::issue("user123", TokenKind::Refresh, "travel-app", Utc::now());
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["type"], "refresh");
        assert_eq!(json["sub"], "user123");
        assert_eq!(json["iss"], "travel-app");
    }

    #[test]
    fn test_is_expired_at_boundary() {
        let issued_at = Utc::now();
        let claims = Claims::issue("user123", TokenKind::Access, "travel-app", issued_at);

        let just_before = issued_at + Duration::minutes(15) - Duration::seconds(1);
        let at_expiry = DateTime::from_timestamp(claims.exp, 0).unwrap();

        assert!(!claims.is_expired_at(just_before));
        assert!(claims.is_expired_at(at_expiry));
    }
}
