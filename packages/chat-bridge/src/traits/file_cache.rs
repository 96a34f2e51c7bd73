//! File cache: materializes abstract file references.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::file::FileReference;

/// The platform's file cache.
///
/// `resolve_cache_id` does whatever fetching or decoding the reference needs
/// (downloading a URL, storing inline bytes, admitting a local path);
/// `local_path` maps a cache id to a readable path. Failures are reported as
/// [`crate::error::BridgeError::FileResolution`].
#[async_trait]
pub trait BaseFileCache: Send + Sync {
    /// Materializes a file reference into the cache and returns its id.
    async fn resolve_cache_id(&self, reference: &FileReference) -> Result<String>;

    /// Returns the local filesystem path for a cache id.
    async fn local_path(&self, cache_id: &str) -> Result<PathBuf>;
}
