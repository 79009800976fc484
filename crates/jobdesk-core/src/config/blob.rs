//! Resume blob-store configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the resume blob store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlobConfig {
    /// Root directory for the local provider.
    #[serde(default = "default_root")]
    pub root: String,
    /// Public base URL prepended to stored object names.
    #[serde(default = "default_base_url")]
    pub public_base_url: String,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            public_base_url: default_base_url(),
        }
    }
}

fn default_root() -> String {
    "data/resumes".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8080/resumes".to_string()
}
