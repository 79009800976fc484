//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session-token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token TTL in days.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_days: u64,
    /// Cookie lifetime in days, consumed by the HTTP transport when it
    /// writes the token back as an HTTP-only cookie.
    #[serde(default = "default_cookie_ttl")]
    pub cookie_ttl_days: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Maximum password length.
    #[serde(default = "default_password_max")]
    pub password_max_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_days: default_token_ttl(),
            cookie_ttl_days: default_cookie_ttl(),
            password_min_length: default_password_min(),
            password_max_length: default_password_max(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    7
}

fn default_cookie_ttl() -> u64 {
    5
}

fn default_password_min() -> usize {
    8
}

fn default_password_max() -> usize {
    32
}
