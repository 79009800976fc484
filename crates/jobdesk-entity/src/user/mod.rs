//! User domain entities.

pub mod model;
pub mod role;

pub use model::{CreateUser, RegisterRequest, User};
pub use role::Role;
