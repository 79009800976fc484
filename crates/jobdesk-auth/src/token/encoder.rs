//! Session-token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use jobdesk_core::config::auth::AuthConfig;
use jobdesk_core::error::AppError;

use super::claims::Claims;

/// Creates signed session tokens binding a request to a user identity.
///
/// The signing secret comes from process-wide configuration, loaded once at
/// startup and never mutated afterwards.
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in days.
    ttl_days: i64,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("ttl_days", &self.ttl_days)
            .finish()
    }
}

/// Result of a successful token issue.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The opaque signed token string.
    pub token: String,
    /// When the token expires.
    pub expires_at: chrono::DateTime<Utc>,
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_days: config.token_ttl_days as i64,
        }
    }

    /// Issues a new session token for the given user.
    pub fn issue(&self, user_id: Uuid) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(self.ttl_days);

        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
