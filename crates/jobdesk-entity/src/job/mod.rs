//! Job-posting domain entities.

pub mod compensation;
pub mod model;

pub use compensation::Compensation;
pub use model::{CreateJob, Job, JobPatch};
