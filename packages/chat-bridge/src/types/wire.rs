//! Wire schema types for the group administration surface.
//!
//! These mirror the generated protocol definitions: enum variants are
//! SCREAMING_SNAKE_CASE, field names camelCase, oneof fields closed tagged
//! enums. Every response is either a success payload specific to the action
//! or the uniform error arm; no action omits the failure arm.

use serde::{Deserialize, Serialize};

use crate::types::file::FileReference;
use crate::types::ids::{GroupId, PublicId};

/// Wire-level sex of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WireSex {
    Male,
    Female,
    Unknown,
}

/// Wire-level permission of a group member.
///
/// `Fallback` is the placeholder for domain roles outside the known
/// normal/admin/owner set; an unrecognized role is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionLevel {
    Normal,
    Admin,
    Owner,
    Fallback,
}

/// A group member as presented on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    /// Public account id of the member.
    pub uin: PublicId,
    pub nick: String,
    pub sex: WireSex,
    pub age: u32,
    pub qid: String,
    /// In-group display card; absent when the member has not set one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_nick: Option<String>,
    pub permission_level: PermissionLevel,
    pub is_robot: bool,
    /// Epoch seconds of the member's last message.
    pub last_speak_time: u64,
    /// Seconds of mute remaining; zero when not muted.
    pub shut_up_remaining: u64,
}

/// Mute request variant: lift an existing mute or mute for a duration.
///
/// Dispatch branches on the tag, never on truthiness of a shared field. An
/// unrecognized tag fails deserialization and is rejected as a malformed
/// payload rather than silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum MuteOperation {
    /// Lift the mute. `lift: false` performs no action and reports success;
    /// clients observed in the wild send it and expect a quiet ack.
    Lift { lift: bool },
    /// Mute for the given number of seconds; zero behaves as a lift.
    Duration { seconds: u64 },
}

/// Role change variant for the admin action. Owner is not settable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminOperation {
    Grant,
    Revoke,
}

// ---------------------------------------------------------------------------
// Per-action request payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMemberIdsRequest {
    pub group_id: GroupId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInfoRequest {
    pub group_id: GroupId,
    pub uin: PublicId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameGroupRequest {
    pub group_id: GroupId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAvatarRequest {
    pub group_id: GroupId,
    pub file: FileReference,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRoleRequest {
    pub group_id: GroupId,
    pub uin: PublicId,
    pub operation: AdminOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCardRequest {
    pub group_id: GroupId,
    pub uin: PublicId,
    /// New display card; empty string clears it.
    pub card: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuteMemberRequest {
    pub group_id: GroupId,
    pub uin: PublicId,
    #[serde(flatten)]
    pub operation: MuteOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuteAllRequest {
    pub group_id: GroupId,
    pub lift: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSpecialTitleRequest {
    pub group_id: GroupId,
    pub uin: PublicId,
    /// New special title; empty string clears it.
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KickMemberRequest {
    pub group_id: GroupId,
    pub uin: PublicId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuitGroupRequest {
    pub group_id: GroupId,
}

// ---------------------------------------------------------------------------
// Per-action success payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberListResponse {
    pub uins: Vec<PublicId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInfoResponse {
    pub member: GroupMember,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAvatarResponse {
    /// Cache id of the applied avatar.
    pub cache_id: String,
}

/// Empty success payload for actions whose result is the side effect itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {}

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// The uniform response envelope: `{"success": <payload>}` or
/// `{"error": {"message": "..."}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionReply {
    Success(serde_json::Value),
    Error { message: String },
}

impl ActionReply {
    /// Wraps an error message in the uniform failure arm.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Returns true for the success arm.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the error message, if this is the failure arm.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            Self::Success(_) => None,
        }
    }
}
