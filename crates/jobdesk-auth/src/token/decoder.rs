//! Session-token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use jobdesk_core::config::auth::AuthConfig;
use jobdesk_core::error::AppError;

use super::claims::Claims;

/// Why a token failed verification.
///
/// An expired-but-correctly-signed token is a different failure from a
/// malformed token or a bad signature; the two kinds stay distinguishable
/// here even though both collapse into `Unauthenticated` at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Malformed token or signature mismatch.
    #[error("session token is invalid")]
    Invalid,
    /// Correct signature but past expiry.
    #[error("session token has expired")]
    Expired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::unauthenticated(err.to_string())
    }
}

/// Validates session tokens.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session-token string.
    ///
    /// Signature check happens first; an expired-but-valid signature yields
    /// [`TokenError::Expired`], everything else [`TokenError::Invalid`].
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid,
                }
            })?;

        Ok(token_data.claims)
    }
}
