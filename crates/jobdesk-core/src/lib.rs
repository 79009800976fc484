//! # jobdesk-core
//!
//! Core crate for the Jobdesk job-board platform. Contains the unified
//! error system, configuration schemas, the blob-storage trait, and the
//! boundary response types.
//!
//! This crate has **no** internal dependencies on other Jobdesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
