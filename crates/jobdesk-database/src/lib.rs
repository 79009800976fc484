//! # jobdesk-database
//!
//! PostgreSQL connection management and concrete repository implementations
//! for all Jobdesk entities. Each repository module also defines the store
//! trait its service consumers depend on, so tests can substitute in-memory
//! implementations.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
