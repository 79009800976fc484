//! Job registry service.

pub mod service;

pub use service::JobService;
