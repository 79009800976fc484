//! Application domain entities.

pub mod model;
pub mod party;

pub use model::{Application, CreateApplication, ResumeRef, SubmitApplication};
pub use party::Party;
