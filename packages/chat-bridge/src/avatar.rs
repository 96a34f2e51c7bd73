//! Avatar file resolution.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::traits::file_cache::BaseFileCache;
use crate::types::file::{FileReference, ResolvedFile};

/// Materializes wire file references through the file-cache collaborator.
///
/// Resolution is all-or-nothing: callers get back a cache id and a local
/// path that need no further I/O, or the action fails whole with a file
/// resolution error.
#[derive(Clone)]
pub struct AvatarResolver {
    cache: Arc<dyn BaseFileCache>,
}

impl AvatarResolver {
    pub fn new(cache: Arc<dyn BaseFileCache>) -> Self {
        Self { cache }
    }

    /// Resolves a file reference into its cache id and local path.
    pub async fn resolve(&self, reference: &FileReference) -> Result<ResolvedFile> {
        let cache_id = self.cache.resolve_cache_id(reference).await?;
        let local_path = self.cache.local_path(&cache_id).await?;
        debug!("Resolved file reference to cache id {}", cache_id);
        Ok(ResolvedFile {
            cache_id,
            local_path,
        })
    }
}
