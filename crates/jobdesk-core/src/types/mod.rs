//! Shared plain types.

pub mod response;

pub use response::{Ack, ErrorResponse};
