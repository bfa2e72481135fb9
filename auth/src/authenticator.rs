use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenPair;
use crate::jwt::TokenService;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

const DUMMY_PASSWORD: &str = "travel-app-dummy-password";

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
    dummy_hash: Option<String>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `password_hasher` - Hasher used for new digests and for verification
    /// * `token_service` - Token minting/validation, already bound to its secret
    pub fn new(password_hasher: PasswordHasher, token_service: TokenService) -> Self {
        let dummy_hash = password_hasher.hash(DUMMY_PASSWORD).ok();
        Self {
            password_hasher,
            token_service,
            dummy_hash,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token pair for `subject`.
    ///
    /// A missing stored hash (unknown account, or one without a password) is
    /// treated exactly like a wrong password. The password is still checked
    /// against a dummy digest of the same cost so the rejection takes as long
    /// as a real mismatch.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password digest, if the account has one
    /// * `subject` - User ID to mint tokens for
    ///
    /// # Errors
    /// * `InvalidCredentials` - No digest, or password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: Option<&str>,
        subject: &str,
    ) -> Result<TokenPair, AuthenticationError> {
        let is_valid = match stored_hash {
            Some(hash) => self.password_hasher.verify(password, hash),
            None => {
                if let Some(dummy) = &self.dummy_hash {
                    self.password_hasher.verify(password, dummy);
                }
                false
            }
        };

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_service.issue_pair(subject)?)
    }

    /// Issue a token pair without password verification.
    ///
    /// For flows where identity was established some other way (signup, OAuth).
    pub fn issue_tokens(&self, subject: &str) -> Result<TokenPair, JwtError> {
        self.token_service.issue_pair(subject)
    }

    /// Exchange a refresh token for a new access token.
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<String, JwtError> {
        self.token_service.refresh_access_token(refresh_token)
    }

    /// Validate an access token presented on a protected request.
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_service.validate_access(token)
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::TokenKind;

    fn authenticator() -> Authenticator {
        Authenticator::new(
            PasswordHasher::with_params(1024, 1, 1).unwrap(),
            TokenService::new(
                b"test_secret_key_at_least_32_bytes_long!",
                TokenService::DEFAULT_ISSUER,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_full_authentication_flow() {
        let auth = authenticator();

        let hash = auth.hash_password("secret123").unwrap();
        let pair = auth
            .authenticate("secret123", Some(&hash), "user-1")
            .expect("Authentication should succeed");

        let claims = auth.validate_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.subject(), "user-1");
        assert_eq!(claims.kind, TokenKind::Access);
    }

    #[test]
    fn test_wrong_password() {
        let auth = authenticator();
        let hash = auth.hash_password("secret123").unwrap();

        let result = auth.authenticate("wrong", Some(&hash), "user-1");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_account_without_password() {
        let auth = authenticator();

        let result = auth.authenticate("secret123", None, "user-1");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_missing_hash_is_checked_against_digest_of_same_cost() {
        let auth = authenticator();
        let real = auth.hash_password("secret123").unwrap();
        let dummy = auth.dummy_hash.as_deref().expect("dummy digest computed");

        let params = |phc: &str| phc.split('$').nth(3).map(str::to_string);
        assert_eq!(params(dummy), params(&real));
        assert!(dummy.starts_with("$argon2id$"));

        // Knowing the dummy password must not open an account without a hash.
        let result = auth.authenticate(DUMMY_PASSWORD, None, "user-1");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_corrupt_stored_hash_is_invalid_credentials() {
        let auth = authenticator();

        let result = auth.authenticate("secret123", Some("not-a-phc-string"), "user-1");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_refresh_flow() {
        let auth = authenticator();
        let pair = auth.issue_tokens("user-1").unwrap();

        let access = auth.refresh_access_token(&pair.refresh_token).unwrap();
        assert_eq!(
            auth.validate_access_token(&access).unwrap().subject(),
            "user-1"
        );
    }
}
