//! Password length policy for new passwords.

use jobdesk_core::config::auth::AuthConfig;
use jobdesk_core::error::AppError;

/// Validates new passwords against the configured length window.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length.
    min_length: usize,
    /// Maximum password length.
    max_length: usize,
}

impl PasswordPolicy {
    /// Creates a new policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            max_length: config.password_max_length,
        }
    }

    /// Validates a password, returning the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let len = password.chars().count();
        if len < self.min_length {
            return Err(AppError::validation(format!(
                "Password must contain at least {} characters",
                self.min_length
            )));
        }
        if len > self.max_length {
            return Err(AppError::validation(format!(
                "Password must not exceed {} characters",
                self.max_length
            )));
        }
        Ok(())
    }
}
