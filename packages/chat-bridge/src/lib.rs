//! Protocol-to-Domain Bridge for Group Chat Administration
//!
//! Translates wire-level group administration actions into platform domain
//! calls and back. Requests address members by their long-lived public id
//! (uin); the domain API only understands session-scoped ids (uid). The
//! bridge resolves between the two, invokes the matching domain primitive,
//! and marshals the result into the tagged wire response.
//!
//! # Design
//!
//! - Identifier discipline: [`IdentityResolver`] is the only place a uin
//!   becomes a uid or vice versa. A resolution miss fails the action before
//!   any domain call: no partial side effects, no placeholder ids.
//! - Collaborators are traits (`Base*`), injected at construction and
//!   substitutable with the mocks in [`testing`].
//! - Enum translation is total: unknown domain roles marshal to the wire
//!   fallback level, never to an error.
//! - One dispatch, one reply: every action failure surfaces as the uniform
//!   `{"error": {"message"}}` arm; nothing internal crosses the boundary.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use chat_bridge::{ActionDispatcher, GroupActions};
//!
//! let actions = Arc::new(GroupActions::new(group_api, identity_api, file_cache));
//! let dispatcher = ActionDispatcher::new(actions);
//!
//! let reply = dispatcher
//!     .dispatch("kick_member", serde_json::json!({
//!         "groupId": "100200300",
//!         "uin": "987654321",
//!     }))
//!     .await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator interfaces (identity, group domain, file cache)
//! - [`types`] - Identifier newtypes, file references, wire schema
//! - [`actions`] - The group administration surface
//! - [`dispatch`] - Name-keyed action dispatch
//! - [`marshal`] - Pure domain → wire mapping
//! - [`testing`] - Mock collaborators for embedding applications

pub mod actions;
pub mod avatar;
pub mod dispatch;
pub mod error;
pub mod identity;
pub mod marshal;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use actions::GroupActions;
pub use avatar::AvatarResolver;
pub use dispatch::ActionDispatcher;
pub use error::{BridgeError, DispatchError, Result};
pub use identity::IdentityResolver;
pub use traits::{
    file_cache::BaseFileCache,
    group::{BaseGroupApi, DomainSex, MemberRecord, MemberRole, MuteEntry},
    identity::BaseIdentityApi,
};
pub use types::{
    file::{FileReference, ResolvedFile},
    ids::{GroupId, IdentityPair, PublicId, SessionId},
    wire::{
        ActionReply, AdminOperation, GroupMember, MuteOperation, PermissionLevel, WireSex,
    },
};
