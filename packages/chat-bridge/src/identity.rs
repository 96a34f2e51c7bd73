//! Identity resolution between public and session ids.
//!
//! The resolver is the single gate through which the rest of the bridge
//! obtains a session id from a public id or vice versa. A lookup miss is a
//! hard, descriptive failure; no action ever proceeds with a placeholder
//! identifier.

use std::sync::Arc;

use tracing::warn;

use crate::error::{BridgeError, Result};
use crate::traits::identity::BaseIdentityApi;
use crate::types::ids::{IdentityPair, PublicId, SessionId};

/// Bidirectional uin ↔ uid resolver over the identity collaborator.
///
/// No caching and no retry here: repeated calls are referentially transparent
/// because the collaborator owns whatever caching it wants.
#[derive(Clone)]
pub struct IdentityResolver {
    api: Arc<dyn BaseIdentityApi>,
}

impl IdentityResolver {
    pub fn new(api: Arc<dyn BaseIdentityApi>) -> Self {
        Self { api }
    }

    /// Resolves a public id to its session id.
    ///
    /// Returns [`BridgeError::IdentityNotFound`] carrying the public id when
    /// the lookup comes back empty.
    pub async fn resolve_session_id(&self, public_id: &PublicId) -> Result<SessionId> {
        match self.api.lookup_session_id(public_id).await? {
            Some(session_id) => Ok(session_id),
            None => {
                warn!("No session id for public id {}", public_id);
                Err(BridgeError::identity_not_found(public_id))
            }
        }
    }

    /// Resolves a session id back to its public id.
    pub async fn resolve_public_id(&self, session_id: &SessionId) -> Result<PublicId> {
        match self.api.lookup_public_id(session_id).await? {
            Some(public_id) => Ok(public_id),
            None => {
                warn!("No public id for session id {}", session_id);
                Err(BridgeError::identity_not_found(session_id))
            }
        }
    }

    /// Resolves a public id and returns both halves together.
    pub async fn resolve_pair(&self, public_id: &PublicId) -> Result<IdentityPair> {
        let session_id = self.resolve_session_id(public_id).await?;
        Ok(IdentityPair {
            public_id: public_id.clone(),
            session_id,
        })
    }
}
