//! Gate enforcement — checks an identity's role against a requested action.

use jobdesk_core::error::AppError;
use jobdesk_entity::user::Role;

use super::action::Action;

/// Enforces the fixed two-role access table.
///
/// The gate is a pure function of `(role, action)`. A denial is a
/// `Forbidden` error, deliberately distinct from "not authenticated" and
/// from "not found": by the time the gate runs, the identity is already
/// resolved. Ownership checks happen afterwards in the owning service.
#[derive(Debug, Clone, Default)]
pub struct RoleGate;

impl RoleGate {
    /// Creates a new gate.
    pub fn new() -> Self {
        Self
    }

    /// Checks whether the given role may perform the action.
    ///
    /// Returns `Ok(())` if allowed, or `Err(AppError::Forbidden)` naming
    /// the role that is not allowed, if denied.
    pub fn authorize(&self, role: Role, action: Action) -> Result<(), AppError> {
        match action.required_role() {
            None => Ok(()),
            Some(required) if required == role => Ok(()),
            Some(_) => Err(AppError::forbidden(format!(
                "{} not allowed to access this resource",
                display_name(role)
            ))),
        }
    }

    /// Checks whether the role may perform the action (returns bool).
    pub fn allows(&self, role: Role, action: Action) -> bool {
        self.authorize(role, action).is_ok()
    }
}

/// Human-facing role name used in denial messages.
fn display_name(role: Role) -> &'static str {
    match role {
        Role::Employer => "Employer",
        Role::JobSeeker => "Job Seeker",
    }
}
