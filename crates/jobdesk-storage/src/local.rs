//! Local filesystem blob-storage provider.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use jobdesk_core::config::blob::BlobConfig;
use jobdesk_core::error::{AppError, ErrorKind};
use jobdesk_core::result::AppResult;
use jobdesk_core::traits::{BlobRef, BlobStorage};

/// Local filesystem blob store.
///
/// Stored objects are named `<uuid>.<ext>`; the public URL is the configured
/// base URL joined with the object name.
#[derive(Debug, Clone)]
pub struct LocalBlobStorage {
    /// Root directory for all stored objects.
    root: PathBuf,
    /// Public base URL for constructing object URLs.
    public_base_url: String,
}

impl LocalBlobStorage {
    /// Create a new local blob store rooted at the configured path.
    pub async fn new(config: &BlobConfig) -> AppResult<Self> {
        let root = PathBuf::from(&config.root);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create blob root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// File extension for a stored object, derived from its media type.
    fn extension(mime_type: &str) -> &str {
        match mime_type {
            "image/png" => "png",
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            _ => "bin",
        }
    }
}

#[async_trait]
impl BlobStorage for LocalBlobStorage {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn upload(&self, file_name: &str, mime_type: &str, data: Bytes) -> AppResult<BlobRef> {
        let id = format!("{}.{}", Uuid::new_v4(), Self::extension(mime_type));
        let path = self.root.join(&id);

        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Upstream,
                format!("Failed to store blob for '{file_name}'"),
                e,
            )
        })?;

        debug!(file_name, id = %id, bytes = data.len(), "Stored blob");
        Ok(BlobRef {
            url: format!("{}/{}", self.public_base_url, id),
            id,
        })
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        // Uploaded object names never contain separators; reject anything
        // that could escape the root.
        if id.contains('/') || id.contains("..") {
            return Err(AppError::validation(format!("Invalid blob id: '{id}'")));
        }
        let path = self.root.join(id);
        fs::remove_file(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {id}"))
            } else {
                AppError::with_source(ErrorKind::Storage, format!("Failed to delete blob: {id}"), e)
            }
        })
    }
}
