//! Application workflow service.

pub mod service;

pub use service::{ApplicationService, ResumeUpload};
