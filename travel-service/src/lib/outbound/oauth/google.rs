use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::OAuthConfig;
use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::ports::OAuthVerifier;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::OAuthProfile;

/// Verifies Google ID tokens against the tokeninfo endpoint.
pub struct GoogleTokenVerifier {
    client: Client,
    tokeninfo_url: String,
    client_id: Option<String>,
}

impl GoogleTokenVerifier {
    pub fn new(client: Client, config: &OAuthConfig) -> Self {
        Self {
            client,
            tokeninfo_url: config.tokeninfo_url.clone(),
            client_id: config.google_client_id.clone(),
        }
    }
}

/// Google reports booleans either as JSON booleans or as `"true"`/`"false"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    fn is_true(&self) -> bool {
        match self {
            Flag::Bool(value) => *value,
            Flag::Text(value) => value.eq_ignore_ascii_case("true"),
        }
    }
}

/// Claims returned by the tokeninfo endpoint. Every field is optional here;
/// the conversion into `OAuthProfile` decides which ones are required.
#[derive(Debug, Deserialize)]
struct TokenInfo {
    email: Option<String>,
    sub: Option<String>,
    name: Option<String>,
    picture: Option<String>,
    aud: Option<String>,
    email_verified: Option<Flag>,
}

impl TryFrom<TokenInfo> for OAuthProfile {
    type Error = AuthError;

    fn try_from(info: TokenInfo) -> Result<Self, Self::Error> {
        let failed = |reason: &str| AuthError::OAuthVerificationFailed(reason.to_string());

        let email = info.email.ok_or_else(|| failed("missing email claim"))?;
        let subject = info
            .sub
            .filter(|s| !s.is_empty())
            .ok_or_else(|| failed("missing sub claim"))?;

        if info.email_verified.is_some_and(|flag| !flag.is_true()) {
            return Err(failed("email not verified by provider"));
        }

        let email = EmailAddress::new(email).map_err(|_| failed("invalid email claim"))?;

        Ok(OAuthProfile {
            email,
            full_name: info.name.filter(|n| !n.is_empty()),
            avatar_url: info.picture.filter(|p| !p.is_empty()),
            subject,
        })
    }
}

#[async_trait]
impl OAuthVerifier for GoogleTokenVerifier {
    async fn verify_identity_token(&self, token: &str) -> Result<OAuthProfile, AuthError> {
        let response = self
            .client
            .get(&self.tokeninfo_url)
            .query(&[("id_token", token)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to reach Google tokeninfo endpoint");
                AuthError::OAuthVerificationFailed("provider unreachable".to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(http_status = %status, "Google rejected identity token");
            return Err(AuthError::OAuthVerificationFailed(format!(
                "provider returned {}",
                status
            )));
        }

        let info: TokenInfo = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "Malformed tokeninfo response");
            AuthError::OAuthVerificationFailed("malformed provider response".to_string())
        })?;

        if let Some(expected) = &self.client_id {
            if info.aud.as_deref() != Some(expected.as_str()) {
                tracing::warn!(
                    token_audience = ?info.aud,
                    expected_client_id = %expected,
                    "Google token audience mismatch"
                );
                return Err(AuthError::OAuthVerificationFailed(
                    "audience mismatch".to_string(),
                ));
            }
        }

        OAuthProfile::try_from(info)
    }
}
