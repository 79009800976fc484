//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::ValidateEmail;

use jobdesk_core::AppError;

use super::role::Role;

/// Display-name length bounds.
const NAME_MIN: usize = 3;
const NAME_MAX: usize = 30;

/// A registered user, either an employer or a job seeker.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address, unique across all users.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Argon2 password hash. Never serialized in responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role, immutable after creation.
    pub role: Role,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// Registration input as supplied by the caller. The password is still
/// plaintext here; it is hashed exactly once before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Plaintext password.
    pub password: String,
    /// Requested role.
    pub role: Role,
}

impl RegisterRequest {
    /// Validates the descriptive fields (everything except the password,
    /// which is checked by the password policy).
    pub fn validate(&self) -> Result<(), AppError> {
        let name_len = self.name.chars().count();
        if name_len < NAME_MIN || name_len > NAME_MAX {
            return Err(AppError::validation(format!(
                "Name must contain between {NAME_MIN} and {NAME_MAX} characters"
            )));
        }
        if !self.email.validate_email() {
            return Err(AppError::validation("Please provide a valid email"));
        }
        if self.phone.trim().is_empty() {
            return Err(AppError::validation("Please provide a phone number"));
        }
        Ok(())
    }
}

/// Data required to create a new user record. The password has already
/// been hashed by the time this struct exists.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Argon2 password hash.
    pub password_hash: String,
    /// Assigned role.
    pub role: Role,
}
