//! Typed errors for the bridge.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match on
//! failure modes. Action failures ([`BridgeError`]) are converted into the
//! wire error arm at the dispatch boundary; dispatch failures
//! ([`DispatchError`]) never reach the wire and indicate a broken caller or
//! configuration.

use thiserror::Error;

use crate::types::ids::{GroupId, PublicId};

/// Errors that can occur while executing a group administration action.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// An identifier could not be resolved to its counterpart.
    ///
    /// Carries the identifier that failed to resolve, never a
    /// partially-resolved value.
    #[error("failed to resolve identity {id}")]
    IdentityNotFound {
        /// The public or session id that the lookup returned nothing for.
        id: String,
    },

    /// The domain API has no record of the member in the group.
    #[error("member {public_id} not found in group {group_id}")]
    MemberNotFound {
        group_id: GroupId,
        public_id: PublicId,
    },

    /// A file reference could not be materialized into a local path.
    #[error("file resolution failed: {0}")]
    FileResolution(String),

    /// The domain API rejected the call; the message is passed through.
    #[error("domain operation failed: {0}")]
    Domain(String),
}

impl BridgeError {
    /// Creates an identity resolution failure for the given identifier.
    pub fn identity_not_found(id: impl ToString) -> Self {
        Self::IdentityNotFound { id: id.to_string() }
    }

    /// Creates a member-not-found failure.
    pub fn member_not_found(group_id: &GroupId, public_id: &PublicId) -> Self {
        Self::MemberNotFound {
            group_id: group_id.clone(),
            public_id: public_id.clone(),
        }
    }

    /// Creates a file resolution failure.
    pub fn file_resolution(message: impl Into<String>) -> Self {
        Self::FileResolution(message.into())
    }

    /// Creates a domain failure with a passed-through message.
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }
}

/// Errors raised by the dispatcher itself, before or after a handler runs.
///
/// These indicate a caller defect (unvalidated action name, payload that does
/// not match the wire schema), not a user-facing condition; they are returned
/// to the transport instead of being wrapped in the wire error arm.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No handler is registered for the action name.
    #[error("unknown action: {action}")]
    UnknownAction { action: String },

    /// The request payload does not deserialize into the action's request type.
    #[error("malformed payload for action {action}: {source}")]
    MalformedPayload {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A success payload failed to serialize.
    #[error("failed to serialize response: {0}")]
    SerializeResponse(#[from] serde_json::Error),
}

/// Result type alias for action-level operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
