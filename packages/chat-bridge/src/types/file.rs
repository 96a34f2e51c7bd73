//! File references and their resolved form.
//!
//! A [`FileReference`] is how the wire protocol names a file without shipping
//! it: inline bytes, a remote URL, a local path, or an id the cache already
//! knows. The file-cache collaborator materializes any of these into a
//! [`ResolvedFile`] before the domain API ever sees it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// An abstract reference to file content, as received on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FileReference {
    /// Raw bytes shipped in the request, base64 on the wire.
    Inline {
        #[serde(with = "base64_bytes")]
        data: Vec<u8>,
    },

    /// Remote content to be fetched by the cache.
    Url { url: String },

    /// A path on the local filesystem.
    Path { path: PathBuf },

    /// Content the cache has already materialized.
    CacheId { cache_id: String },
}

/// A fully materialized file: cache id plus a local path that requires no
/// further network or disk I/O to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub cache_id: String,
    pub local_path: PathBuf,
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
