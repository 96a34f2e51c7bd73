//! Group domain API: the platform primitives this bridge orchestrates.
//!
//! Everything here is keyed by session ids; the domain side never sees a
//! public id. Records carry raw domain enums; mapping to the wire vocabulary
//! happens in `marshal`, not here.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ids::{GroupId, SessionId};

/// Sex of an account as reported by the domain API.
///
/// `Other` carries the raw code so unmapped values stay inspectable instead
/// of collapsing into a unit variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainSex {
    Male,
    Female,
    Other(u32),
}

/// Group role as reported by the domain API.
///
/// The known set is normal/admin/owner; anything else arrives as `Other`
/// with the raw code and marshals to the wire fallback level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRole {
    Normal,
    Admin,
    Owner,
    Other(u32),
}

/// Raw member row as the domain API returns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    pub session_id: SessionId,
    pub nick: String,
    pub sex: DomainSex,
    pub age: u32,
    pub qid: String,
    /// In-group display card; empty when unset.
    pub card_name: String,
    pub role: MemberRole,
    pub is_robot: bool,
    /// Epoch seconds of the member's last message.
    pub last_speak_time: u64,
    /// Seconds of mute remaining; zero when not muted.
    pub shut_up_remaining: u64,
}

/// One entry of a member mute call. `seconds == 0` lifts the mute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuteEntry {
    pub session_id: SessionId,
    pub seconds: u64,
}

/// The group administration primitives of the platform.
///
/// The domain mute and kick primitives are batch-shaped; this bridge always
/// passes single-element batches.
#[async_trait]
pub trait BaseGroupApi: Send + Sync {
    /// Lists the current members of a group, in the platform's order.
    async fn group_members(&self, group_id: &GroupId) -> Result<Vec<MemberRecord>>;

    /// Fetches a single member record, or `None` if the member is not in the
    /// group.
    async fn member_record(
        &self,
        group_id: &GroupId,
        session_id: &SessionId,
    ) -> Result<Option<MemberRecord>>;

    /// Sets the group display name.
    async fn set_group_name(&self, group_id: &GroupId, name: &str) -> Result<()>;

    /// Applies an already-materialized local file as the group avatar.
    async fn set_group_avatar(&self, group_id: &GroupId, path: &Path) -> Result<()>;

    /// Sets a member's role. Only normal and admin are reachable through the
    /// bridge; owner transfer is not part of this surface.
    async fn set_member_role(
        &self,
        group_id: &GroupId,
        session_id: &SessionId,
        role: MemberRole,
    ) -> Result<()>;

    /// Sets a member's display card; empty string clears it.
    async fn set_member_card(
        &self,
        group_id: &GroupId,
        session_id: &SessionId,
        card: &str,
    ) -> Result<()>;

    /// Mutes or unmutes members; an entry with zero seconds is an unmute.
    async fn ban_members(&self, group_id: &GroupId, entries: &[MuteEntry]) -> Result<()>;

    /// Mutes (`true`) or unmutes (`false`) the whole group.
    async fn ban_group(&self, group_id: &GroupId, ban: bool) -> Result<()>;

    /// Sets a member's special title; empty string clears it.
    async fn set_special_title(
        &self,
        group_id: &GroupId,
        session_id: &SessionId,
        title: &str,
    ) -> Result<()>;

    /// Removes members from the group.
    async fn kick_members(&self, group_id: &GroupId, session_ids: &[SessionId]) -> Result<()>;

    /// Leaves the group as the logged-in account.
    async fn quit_group(&self, group_id: &GroupId) -> Result<()>;
}
