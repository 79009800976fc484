//! Store traits and repository implementations for all Jobdesk entities.

pub mod application;
pub mod job;
pub mod user;

pub use application::{ApplicationRepository, ApplicationStore};
pub use job::{JobRepository, JobStore};
pub use user::{UserRepository, UserStore};
