//! Blob-storage trait for the external resume store.
//!
//! The platform treats resume hosting as an opaque upload-returns-`(id, url)`
//! service. The trait is defined here in `jobdesk-core` and implemented in
//! `jobdesk-storage`; tests substitute in-memory fakes.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Reference to a stored blob, as returned by the store on upload.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BlobRef {
    /// Store-assigned object identifier.
    pub id: String,
    /// Publicly reachable URL for the object.
    pub url: String,
}

/// Trait for resume blob-storage backends.
///
/// An implementation that returns a [`BlobRef`] with an empty id or url is
/// considered failed by callers; a successful upload must populate both.
#[async_trait]
pub trait BlobStorage: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Upload an object and return its store reference.
    async fn upload(&self, file_name: &str, mime_type: &str, data: Bytes) -> AppResult<BlobRef>;

    /// Delete an object by its store-assigned identifier.
    async fn delete(&self, id: &str) -> AppResult<()>;
}
