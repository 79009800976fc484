//! # jobdesk-storage
//!
//! Blob-storage providers implementing the [`BlobStorage`] trait from
//! `jobdesk-core`. The platform only needs the upload-returns-`(id, url)`
//! contract; the local provider backs it with a directory on disk.
//!
//! [`BlobStorage`]: jobdesk_core::traits::BlobStorage

pub mod local;

pub use local::LocalBlobStorage;
