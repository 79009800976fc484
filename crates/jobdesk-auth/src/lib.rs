//! # jobdesk-auth
//!
//! Credential storage, session tokens, and role-based authorization for the
//! Jobdesk platform.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and length policy
//! - `token` — session-token issue/verify with distinct invalid/expired failures
//! - `gate` — the pure role-authorization gate over the fixed action table

pub mod gate;
pub mod password;
pub mod token;

pub use gate::{Action, RoleGate};
pub use password::{PasswordHasher, PasswordPolicy};
pub use token::{Claims, IssuedToken, TokenDecoder, TokenEncoder, TokenError};
