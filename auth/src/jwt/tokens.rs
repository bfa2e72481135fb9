use chrono::DateTime;
use chrono::Utc;

use super::claims::Claims;
use super::claims::TokenKind;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Access and refresh token minted together for one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Mints and validates typed access/refresh tokens.
///
/// Built once at startup from an explicit secret and shared read-only
/// between requests.
pub struct TokenService {
    handler: JwtHandler,
    issuer: String,
}

impl TokenService {
    pub const DEFAULT_ISSUER: &'static str = "travel-app";

    /// Create a token service.
    ///
    /// # Arguments
    /// * `secret` - Signing secret, at least 32 bytes
    /// * `issuer` - Value stamped into and required from the `iss` claim
    ///
    /// # Errors
    /// * `InvalidSecret` - Secret is missing or too short
    pub fn new(secret: &[u8], issuer: impl Into<String>) -> Result<Self, JwtError> {
        let issuer = issuer.into();
        let handler = JwtHandler::new(secret, &issuer)?;
        Ok(Self { handler, issuer })
    }

    /// Issue an access token and a refresh token sharing the same subject.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue_pair(&self, subject: &str) -> Result<TokenPair, JwtError> {
        let now = Utc::now();
        Ok(TokenPair {
            access_token: self.issue_token_at(subject, TokenKind::Access, now)?,
            refresh_token: self.issue_token_at(subject, TokenKind::Refresh, now)?,
        })
    }

    /// Issue a single token of `kind` as if minted at `issued_at`.
    pub fn issue_token_at(
        &self,
        subject: &str,
        kind: TokenKind,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = Claims::issue(subject, kind, self.issuer.as_str(), issued_at);
        self.handler.encode(&claims)
    }

    /// Validate a token of either kind.
    ///
    /// # Errors
    /// * `Expired`, `BadSignature`, `Malformed`, `UnsupportedAlgorithm`
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        let claims: Claims = self.handler.decode(token)?;

        if claims.is_expired_at(Utc::now()) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }

    /// Validate a token and require it to be of `expected` kind.
    pub fn validate_kind(&self, token: &str, expected: TokenKind) -> Result<Claims, JwtError> {
        let claims = self.validate(token)?;

        if claims.kind != expected {
            return Err(JwtError::WrongTokenType {
                expected,
                actual: claims.kind,
            });
        }

        Ok(claims)
    }

    /// Validate a token presented on a protected request.
    pub fn validate_access(&self, token: &str) -> Result<Claims, JwtError> {
        self.validate_kind(token, TokenKind::Access)
    }

    /// Exchange a refresh token for a fresh access token for the same subject.
    ///
    /// The refresh token itself stays valid until its own expiry.
    ///
    /// # Errors
    /// * `WrongTokenType` - An access token was presented
    /// * any error from [`TokenService::validate`]
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<String, JwtError> {
        let claims = self.validate_kind(refresh_token, TokenKind::Refresh)?;
        self.issue_token_at(claims.subject(), TokenKind::Access, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn service() -> TokenService {
        TokenService::new(
            b"test-secret-key-for-jwt-signing-at-least-32-bytes",
            TokenService::DEFAULT_ISSUER,
        )
        .expect("valid secret")
    }

    #[test]
    fn test_issue_pair_round_trips_subject_and_kind() {
        let service = service();
        let pair = service.issue_pair("user-1").unwrap();

        let access = service.validate(&pair.access_token).unwrap();
        assert_eq!(access.kind, TokenKind::Access);
        assert_eq!(access.subject(), "user-1");
        assert_eq!(access.iss, "travel-app");

        let refresh = service.validate(&pair.refresh_token).unwrap();
        assert_eq!(refresh.kind, TokenKind::Refresh);
        assert_eq!(refresh.subject(), "user-1");
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        let result = TokenService::new(b"", TokenService::DEFAULT_ISSUER);
        assert!(matches!(result, Err(JwtError::InvalidSecret(_))));
    }

    #[test]
    fn test_access_token_expires_after_fifteen_minutes() {
        let service = service();
        let token = service
            .issue_token_at(
                "user-1",
                TokenKind::Access,
                Utc::now() - Duration::minutes(15) - Duration::seconds(1),
            )
            .unwrap();

        assert_eq!(service.validate(&token), Err(JwtError::Expired));
    }

    #[test]
    fn test_refresh_token_still_valid_near_end_of_week() {
        let service = service();
        let issued_at = Utc::now() - Duration::days(7) + Duration::minutes(1);
        let token = service
            .issue_token_at("user-1", TokenKind::Refresh, issued_at)
            .unwrap();

        let access = service.refresh_access_token(&token).unwrap();
        assert_eq!(service.validate_access(&access).unwrap().subject(), "user-1");
    }

    #[test]
    fn test_refresh_token_expires_after_seven_days() {
        let service = service();
        let issued_at = Utc::now() - Duration::days(7) - Duration::seconds(1);
        let token = service
            .issue_token_at("user-1", TokenKind::Refresh, issued_at)
            .unwrap();

        assert_eq!(service.refresh_access_token(&token), Err(JwtError::Expired));
    }

    #[test]
    fn test_refresh_with_access_token_is_wrong_type() {
        let service = service();
        let pair = service.issue_pair("user-1").unwrap();

        assert_eq!(
            service.refresh_access_token(&pair.access_token),
            Err(JwtError::WrongTokenType {
                expected: TokenKind::Refresh,
                actual: TokenKind::Access,
            })
        );
    }

    #[test]
    fn test_refresh_token_rejected_as_access_token() {
        let service = service();
        let pair = service.issue_pair("user-1").unwrap();

        assert!(matches!(
            service.validate_access(&pair.refresh_token),
            Err(JwtError::WrongTokenType { .. })
        ));
    }

    #[test]
    fn test_refresh_does_not_consume_refresh_token() {
        let service = service();
        let pair = service.issue_pair("user-1").unwrap();

        service.refresh_access_token(&pair.refresh_token).unwrap();
        service.refresh_access_token(&pair.refresh_token).unwrap();
    }

    #[test]
    fn test_token_from_other_secret_is_bad_signature() {
        let other = TokenService::new(
            b"another-secret-key-that-is-also-32-bytes!",
            TokenService::DEFAULT_ISSUER,
        )
        .unwrap();
        let pair = other.issue_pair("user-1").unwrap();

        assert_eq!(
            service().validate(&pair.access_token),
            Err(JwtError::BadSignature)
        );
    }
}
