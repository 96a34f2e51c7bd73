//! Group administration actions.
//!
//! One async method per wire action. Every method that needs a session id
//! resolves it through [`IdentityResolver`] first and fails fast before
//! touching the domain API, so a resolution miss never produces a partial
//! side effect. Methods return domain-shaped values; the dispatcher wraps them
//! into the wire envelope.

use std::sync::Arc;

use tracing::info;

use crate::avatar::AvatarResolver;
use crate::error::{BridgeError, Result};
use crate::identity::IdentityResolver;
use crate::marshal;
use crate::traits::file_cache::BaseFileCache;
use crate::traits::group::{BaseGroupApi, MemberRole, MuteEntry};
use crate::traits::identity::BaseIdentityApi;
use crate::types::file::FileReference;
use crate::types::ids::{GroupId, PublicId};
use crate::types::wire::{AdminOperation, GroupMember, MuteOperation};

/// The group administration surface, with all collaborators injected at
/// construction. Safe to share behind an `Arc` across concurrent dispatches;
/// it holds no mutable state of its own.
pub struct GroupActions {
    group_api: Arc<dyn BaseGroupApi>,
    identity: IdentityResolver,
    avatar: AvatarResolver,
}

impl GroupActions {
    pub fn new(
        group_api: Arc<dyn BaseGroupApi>,
        identity_api: Arc<dyn BaseIdentityApi>,
        file_cache: Arc<dyn BaseFileCache>,
    ) -> Self {
        Self {
            group_api,
            identity: IdentityResolver::new(identity_api),
            avatar: AvatarResolver::new(file_cache),
        }
    }

    /// Returns the public ids of the group's current members, in the
    /// platform's order.
    pub async fn list_member_ids(&self, group_id: &GroupId) -> Result<Vec<PublicId>> {
        let records = self.group_api.group_members(group_id).await?;
        let mut uins = Vec::with_capacity(records.len());
        for record in &records {
            uins.push(self.identity.resolve_public_id(&record.session_id).await?);
        }
        Ok(uins)
    }

    /// Fetches and marshals a single member's record.
    pub async fn member_info(&self, group_id: &GroupId, uin: &PublicId) -> Result<GroupMember> {
        let uid = self.identity.resolve_session_id(uin).await?;
        let record = self
            .group_api
            .member_record(group_id, &uid)
            .await?
            .ok_or_else(|| BridgeError::member_not_found(group_id, uin))?;
        Ok(marshal::member_to_wire(uin.clone(), record))
    }

    /// Sets the group display name.
    pub async fn rename_group(&self, group_id: &GroupId, name: &str) -> Result<()> {
        info!("Renaming group {} to: {}", group_id, name);
        self.group_api.set_group_name(group_id, name).await
    }

    /// Resolves the file reference, applies it as the group avatar, and
    /// returns the cache id of the applied file.
    pub async fn set_avatar(&self, group_id: &GroupId, file: &FileReference) -> Result<String> {
        let resolved = self.avatar.resolve(file).await?;
        self.group_api
            .set_group_avatar(group_id, &resolved.local_path)
            .await?;
        info!("Set avatar for group {} from cache {}", group_id, resolved.cache_id);
        Ok(resolved.cache_id)
    }

    /// Grants or revokes admin. Owner is not reachable through this action.
    pub async fn set_role(
        &self,
        group_id: &GroupId,
        uin: &PublicId,
        operation: AdminOperation,
    ) -> Result<()> {
        let uid = self.identity.resolve_session_id(uin).await?;
        let role = match operation {
            AdminOperation::Grant => MemberRole::Admin,
            AdminOperation::Revoke => MemberRole::Normal,
        };
        info!("Setting role of {} in group {} to {:?}", uin, group_id, role);
        self.group_api.set_member_role(group_id, &uid, role).await
    }

    /// Sets a member's display card; an empty string clears it. Safe to call
    /// repeatedly with identical effect.
    pub async fn set_card(&self, group_id: &GroupId, uin: &PublicId, card: &str) -> Result<()> {
        let uid = self.identity.resolve_session_id(uin).await?;
        self.group_api.set_member_card(group_id, &uid, card).await
    }

    /// Applies a mute operation to a member.
    ///
    /// `Lift { lift: true }` and `Duration { seconds: 0 }` both reach the
    /// domain as an unmute (zero-second entry). `Lift { lift: false }` is a
    /// documented no-op: it performs no domain call and reports success.
    pub async fn mute(
        &self,
        group_id: &GroupId,
        uin: &PublicId,
        operation: MuteOperation,
    ) -> Result<()> {
        let seconds = match operation {
            MuteOperation::Lift { lift: false } => {
                info!("Ignoring mute lift=false for {} in group {}", uin, group_id);
                return Ok(());
            }
            MuteOperation::Lift { lift: true } => 0,
            MuteOperation::Duration { seconds } => seconds,
        };
        let uid = self.identity.resolve_session_id(uin).await?;
        info!("Muting {} in group {} for {}s", uin, group_id, seconds);
        self.group_api
            .ban_members(
                group_id,
                &[MuteEntry {
                    session_id: uid,
                    seconds,
                }],
            )
            .await
    }

    /// Toggles the group-wide mute. The domain primitive takes the inverse
    /// boolean: "ban" means not-lift.
    pub async fn mute_all(&self, group_id: &GroupId, lift: bool) -> Result<()> {
        info!("Setting group {} mute-all lift: {}", group_id, lift);
        self.group_api.ban_group(group_id, !lift).await
    }

    /// Sets a member's special title; an empty string clears it.
    pub async fn set_special_title(
        &self,
        group_id: &GroupId,
        uin: &PublicId,
        title: &str,
    ) -> Result<()> {
        let uid = self.identity.resolve_session_id(uin).await?;
        self.group_api
            .set_special_title(group_id, &uid, title)
            .await
    }

    /// Removes a member from the group.
    pub async fn kick_member(&self, group_id: &GroupId, uin: &PublicId) -> Result<()> {
        let uid = self.identity.resolve_session_id(uin).await?;
        info!("Kicking {} from group {}", uin, group_id);
        self.group_api.kick_members(group_id, &[uid]).await
    }

    /// Leaves the group as the logged-in account.
    pub async fn quit_group(&self, group_id: &GroupId) -> Result<()> {
        info!("Quitting group {}", group_id);
        self.group_api.quit_group(group_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{GroupApiCall, MockFileCache, MockGroupApi, MockIdentityApi};
    use crate::traits::group::{DomainSex, MemberRecord};
    use crate::types::ids::SessionId;
    use crate::types::wire::PermissionLevel;

    fn member(uid: &str, role: MemberRole) -> MemberRecord {
        MemberRecord {
            session_id: SessionId::new(uid),
            nick: format!("nick-{}", uid),
            sex: DomainSex::Male,
            age: 20,
            qid: String::new(),
            card_name: String::new(),
            role,
            is_robot: false,
            last_speak_time: 1_700_000_000,
            shut_up_remaining: 0,
        }
    }

    struct Harness {
        group_api: Arc<MockGroupApi>,
        actions: GroupActions,
    }

    fn harness(identity: MockIdentityApi, group_api: MockGroupApi) -> Harness {
        let group_api = Arc::new(group_api);
        let actions = GroupActions::new(
            group_api.clone(),
            Arc::new(identity),
            Arc::new(MockFileCache::new()),
        );
        Harness { group_api, actions }
    }

    fn group() -> GroupId {
        GroupId::new("100200300")
    }

    fn uin() -> PublicId {
        PublicId::new("987654321")
    }

    #[tokio::test]
    async fn lists_member_ids_in_domain_order() {
        let identity = MockIdentityApi::new()
            .with_pair("111", "u-1")
            .with_pair("222", "u-2");
        let group_api = MockGroupApi::new()
            .with_member(group(), member("u-1", MemberRole::Owner))
            .with_member(group(), member("u-2", MemberRole::Normal));
        let h = harness(identity, group_api);

        let uins = h.actions.list_member_ids(&group()).await.unwrap();
        assert_eq!(uins, vec![PublicId::new("111"), PublicId::new("222")]);
    }

    #[tokio::test]
    async fn member_info_marshals_the_record() {
        let identity = MockIdentityApi::new().with_pair("987654321", "u-abc");
        let mut record = member("u-abc", MemberRole::Admin);
        record.card_name = "the card".to_string();
        let group_api = MockGroupApi::new().with_member(group(), record);
        let h = harness(identity, group_api);

        let info = h.actions.member_info(&group(), &uin()).await.unwrap();
        assert_eq!(info.uin, uin());
        assert_eq!(info.permission_level, PermissionLevel::Admin);
        assert_eq!(info.group_nick, Some("the card".to_string()));
    }

    #[tokio::test]
    async fn member_info_fails_fast_on_unresolved_uin() {
        let h = harness(MockIdentityApi::new(), MockGroupApi::new());

        let error = h
            .actions
            .member_info(&group(), &PublicId::new("unknown-uin"))
            .await
            .unwrap_err();

        assert!(error.to_string().contains("unknown-uin"));
        // Fail-fast: the domain API was never touched.
        assert!(h.group_api.calls().is_empty());
    }

    #[tokio::test]
    async fn member_info_reports_missing_member() {
        let identity = MockIdentityApi::new().with_pair("987654321", "u-abc");
        let h = harness(identity, MockGroupApi::new());

        let error = h.actions.member_info(&group(), &uin()).await.unwrap_err();
        assert!(matches!(error, BridgeError::MemberNotFound { .. }));
        assert!(error.to_string().contains("987654321"));
    }

    #[tokio::test]
    async fn kick_resolves_then_kicks_a_single_element_batch() {
        let identity = MockIdentityApi::new().with_pair("987654321", "u-abc");
        let h = harness(identity, MockGroupApi::new());

        h.actions.kick_member(&group(), &uin()).await.unwrap();

        assert_eq!(
            h.group_api.calls(),
            vec![GroupApiCall::KickMembers {
                group_id: group(),
                session_ids: vec![SessionId::new("u-abc")],
            }]
        );
    }

    #[tokio::test]
    async fn kick_with_unresolved_uin_issues_no_domain_call() {
        let h = harness(MockIdentityApi::new(), MockGroupApi::new());

        let error = h.actions.kick_member(&group(), &uin()).await.unwrap_err();
        assert!(error.to_string().contains("987654321"));
        assert!(h.group_api.calls().is_empty());
    }

    #[tokio::test]
    async fn mute_duration_zero_and_lift_true_are_the_same_domain_call() {
        let identity = MockIdentityApi::new().with_pair("987654321", "u-abc");
        let h = harness(identity, MockGroupApi::new());

        h.actions
            .mute(&group(), &uin(), MuteOperation::Duration { seconds: 0 })
            .await
            .unwrap();
        h.actions
            .mute(&group(), &uin(), MuteOperation::Lift { lift: true })
            .await
            .unwrap();

        let calls = h.group_api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(
            calls[0],
            GroupApiCall::BanMembers {
                group_id: group(),
                entries: vec![MuteEntry {
                    session_id: SessionId::new("u-abc"),
                    seconds: 0,
                }],
            }
        );
    }

    #[tokio::test]
    async fn mute_lift_false_is_a_successful_no_op() {
        let identity = MockIdentityApi::new().with_pair("987654321", "u-abc");
        let h = harness(identity, MockGroupApi::new());

        h.actions
            .mute(&group(), &uin(), MuteOperation::Lift { lift: false })
            .await
            .unwrap();

        assert!(h.group_api.calls().is_empty());
    }

    #[tokio::test]
    async fn mute_duration_passes_the_seconds_through() {
        let identity = MockIdentityApi::new().with_pair("987654321", "u-abc");
        let h = harness(identity, MockGroupApi::new());

        h.actions
            .mute(&group(), &uin(), MuteOperation::Duration { seconds: 600 })
            .await
            .unwrap();

        assert_eq!(
            h.group_api.calls(),
            vec![GroupApiCall::BanMembers {
                group_id: group(),
                entries: vec![MuteEntry {
                    session_id: SessionId::new("u-abc"),
                    seconds: 600,
                }],
            }]
        );
    }

    #[tokio::test]
    async fn mute_all_inverts_the_lift_flag() {
        let h = harness(MockIdentityApi::new(), MockGroupApi::new());

        h.actions.mute_all(&group(), true).await.unwrap();
        h.actions.mute_all(&group(), false).await.unwrap();

        assert_eq!(
            h.group_api.calls(),
            vec![
                GroupApiCall::BanGroup {
                    group_id: group(),
                    ban: false,
                },
                GroupApiCall::BanGroup {
                    group_id: group(),
                    ban: true,
                },
            ]
        );
    }

    #[tokio::test]
    async fn set_role_maps_grant_and_revoke() {
        let identity = MockIdentityApi::new().with_pair("987654321", "u-abc");
        let h = harness(identity, MockGroupApi::new());

        h.actions
            .set_role(&group(), &uin(), AdminOperation::Grant)
            .await
            .unwrap();
        h.actions
            .set_role(&group(), &uin(), AdminOperation::Revoke)
            .await
            .unwrap();

        assert_eq!(
            h.group_api.calls(),
            vec![
                GroupApiCall::SetMemberRole {
                    group_id: group(),
                    session_id: SessionId::new("u-abc"),
                    role: MemberRole::Admin,
                },
                GroupApiCall::SetMemberRole {
                    group_id: group(),
                    session_id: SessionId::new("u-abc"),
                    role: MemberRole::Normal,
                },
            ]
        );
    }

    #[tokio::test]
    async fn clearing_the_card_twice_has_identical_effect() {
        let identity = MockIdentityApi::new().with_pair("987654321", "u-abc");
        let h = harness(identity, MockGroupApi::new());

        h.actions.set_card(&group(), &uin(), "").await.unwrap();
        h.actions.set_card(&group(), &uin(), "").await.unwrap();

        let calls = h.group_api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(
            calls[0],
            GroupApiCall::SetMemberCard {
                group_id: group(),
                session_id: SessionId::new("u-abc"),
                card: String::new(),
            }
        );
    }

    #[tokio::test]
    async fn set_avatar_applies_the_resolved_path_and_returns_the_cache_id() {
        let h = harness(MockIdentityApi::new(), MockGroupApi::new());

        let cache_id = h
            .actions
            .set_avatar(
                &group(),
                &FileReference::Url {
                    url: "https://example.org/avatar.png".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(cache_id, "cache-1");
        assert_eq!(
            h.group_api.calls(),
            vec![GroupApiCall::SetGroupAvatar {
                group_id: group(),
                path: std::path::PathBuf::from("/tmp/file-cache/cache-1"),
            }]
        );
    }

    #[tokio::test]
    async fn set_avatar_fails_whole_when_resolution_fails() {
        let group_api = Arc::new(MockGroupApi::new());
        let actions = GroupActions::new(
            group_api.clone(),
            Arc::new(MockIdentityApi::new()),
            Arc::new(MockFileCache::new().failing_with("decode failure")),
        );

        let error = actions
            .set_avatar(
                &group(),
                &FileReference::Inline {
                    data: vec![0xFF, 0xD8],
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(error, BridgeError::FileResolution(_)));
        assert!(group_api.calls().is_empty());
    }

    #[tokio::test]
    async fn domain_failures_propagate_with_their_message() {
        let h = harness(
            MockIdentityApi::new(),
            MockGroupApi::new().failing_with("group is read-only"),
        );

        let error = h
            .actions
            .rename_group(&group(), "new name")
            .await
            .unwrap_err();
        assert!(matches!(error, BridgeError::Domain(_)));
        assert!(error.to_string().contains("group is read-only"));
    }

    #[tokio::test]
    async fn special_title_resolves_then_sets() {
        let identity = MockIdentityApi::new().with_pair("987654321", "u-abc");
        let h = harness(identity, MockGroupApi::new());

        h.actions
            .set_special_title(&group(), &uin(), "champion")
            .await
            .unwrap();

        assert_eq!(
            h.group_api.calls(),
            vec![GroupApiCall::SetSpecialTitle {
                group_id: group(),
                session_id: SessionId::new("u-abc"),
                title: "champion".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn quit_group_delegates() {
        let h = harness(MockIdentityApi::new(), MockGroupApi::new());

        h.actions.quit_group(&group()).await.unwrap();
        assert_eq!(
            h.group_api.calls(),
            vec![GroupApiCall::QuitGroup { group_id: group() }]
        );
    }
}
