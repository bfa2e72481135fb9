use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

/// Freshly minted share token and its validity window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedShareToken {
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Mints opaque, unguessable share tokens.
///
/// Tokens are 16 bytes from the OS CSPRNG, hex encoded. They are unrelated to
/// the JWT format and carry no data; the mapping to a trip lives in storage.
#[derive(Debug, Clone)]
pub struct ShareTokenGenerator {
    ttl: Duration,
}

impl ShareTokenGenerator {
    pub const TOKEN_BYTES: usize = 16;

    pub fn new() -> Self {
        Self {
            ttl: Duration::days(30),
        }
    }

    /// Mint a token valid from now until now + ttl.
    pub fn issue(&self) -> IssuedShareToken {
        self.issue_at(Utc::now())
    }

    pub fn issue_at(&self, created_at: DateTime<Utc>) -> IssuedShareToken {
        let mut bytes = [0u8; Self::TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);

        IssuedShareToken {
            token: hex::encode(bytes),
            created_at,
            expires_at: created_at + self.ttl,
        }
    }
}

impl Default for ShareTokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}
