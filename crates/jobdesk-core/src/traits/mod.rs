//! Cross-crate trait definitions.

pub mod blob;

pub use blob::{BlobRef, BlobStorage};
