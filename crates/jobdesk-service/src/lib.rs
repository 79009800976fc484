//! # jobdesk-service
//!
//! Business-logic services for the Jobdesk platform. Each service owns one
//! slice of the request flow: `auth` resolves identities and issues session
//! tokens, `job` runs the posting registry, and `application` runs the
//! submission workflow over the job store and the external blob store.
//!
//! Services depend on the store traits from `jobdesk-database`, never on a
//! live pool directly, so every operation can be exercised against
//! in-memory stores in tests.

pub mod application;
pub mod auth;
pub mod context;
pub mod job;

pub use context::RequestContext;
