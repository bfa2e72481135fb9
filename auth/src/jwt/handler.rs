use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::decode;
use jsonwebtoken::decode_header;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::JwtError;

/// JWT token handler for encoding and decoding tokens.
///
/// Signs with HS256 and accepts nothing else: the header algorithm is checked
/// against the allowlist before any signature work, so `none` and
/// algorithm-confusion tokens are refused outright.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
}

impl JwtHandler {
    /// Minimum secret size for HS256 (256 bits).
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `issuer` - Expected value of the `iss` claim
    ///
    /// # Errors
    /// * `InvalidSecret` - Secret is empty or shorter than 32 bytes
    pub fn new(secret: &[u8], issuer: &str) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::InvalidSecret("secret is empty".to_string()));
        }
        if secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(JwtError::InvalidSecret(format!(
                "secret must be at least {} bytes, got {}",
                Self::MIN_SECRET_LENGTH,
                secret.len()
            )));
        }

        let algorithm = Algorithm::HS256;
        let mut validation = Validation::new(algorithm);
        validation.leeway = 0;
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            validation,
        })
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify signature, issuer and expiry, and decode the claims.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Header names any algorithm other than HS256
    /// * `BadSignature` - Signature does not match the configured secret
    /// * `Expired` - `exp` is in the past
    /// * `Malformed` - Anything else (bad encoding, missing claims, wrong issuer)
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        self.ensure_allowed_algorithm(token)?;

        let token_data =
            decode::<T>(token, &self.decoding_key, &self.validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                ErrorKind::InvalidSignature => JwtError::BadSignature,
                ErrorKind::InvalidAlgorithm => {
                    JwtError::UnsupportedAlgorithm("algorithm not allowed".to_string())
                }
                _ => JwtError::Malformed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }

    fn ensure_allowed_algorithm(&self, token: &str) -> Result<(), JwtError> {
        match decode_header(token) {
            Ok(header) if header.alg == self.algorithm => Ok(()),
            Ok(header) => Err(JwtError::UnsupportedAlgorithm(format!("{:?}", header.alg))),
            // jsonwebtoken cannot parse headers naming algorithms it does not
            // implement (e.g. "none"), so fall back to reading the raw field.
            Err(e) => match raw_header_algorithm(token) {
                Some(alg) if alg != "HS256" => Err(JwtError::UnsupportedAlgorithm(alg)),
                _ => Err(JwtError::Malformed(e.to_string())),
            },
        }
    }
}

fn raw_header_algorithm(token: &str) -> Option<String> {
    let encoded = token.split('.').next()?;
    let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
    let header: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    header.get("alg")?.as_str().map(str::to_owned)
}
