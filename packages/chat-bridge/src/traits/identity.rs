//! Identity lookup between the public and session id spaces.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ids::{PublicId, SessionId};

/// Bidirectional identity lookup backed by the platform.
///
/// Absence is `Ok(None)`, not an error; the caller decides what a miss
/// means. Infrastructure failures are `Err`. Lookups are expected to be
/// referentially transparent within the session's validity window; any
/// caching lives behind this trait, not in the bridge.
#[async_trait]
pub trait BaseIdentityApi: Send + Sync {
    /// Looks up the session id for a public id.
    async fn lookup_session_id(&self, public_id: &PublicId) -> Result<Option<SessionId>>;

    /// Looks up the public id for a session id.
    async fn lookup_public_id(&self, session_id: &SessionId) -> Result<Option<PublicId>>;
}
