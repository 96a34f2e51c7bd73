//! Testing utilities including mock collaborators.
//!
//! These are useful for testing applications that embed the bridge without a
//! live platform behind it. Each mock records the calls made against it so
//! tests can assert not just on results but on which domain primitives were
//! (or were not) reached.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{BridgeError, Result};
use crate::traits::file_cache::BaseFileCache;
use crate::traits::group::{BaseGroupApi, MemberRecord, MemberRole, MuteEntry};
use crate::traits::identity::BaseIdentityApi;
use crate::types::file::FileReference;
use crate::types::ids::{GroupId, PublicId, SessionId};

// =============================================================================
// Mock Identity API
// =============================================================================

/// In-memory bidirectional identity table.
///
/// Unknown identifiers resolve to `Ok(None)`, matching the collaborator
/// contract that absence is not an infrastructure failure.
#[derive(Default)]
pub struct MockIdentityApi {
    by_public: Arc<RwLock<HashMap<PublicId, SessionId>>>,
    by_session: Arc<RwLock<HashMap<SessionId, PublicId>>>,
    calls: Arc<RwLock<Vec<IdentityCall>>>,
}

/// Record of a call made to the mock identity API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityCall {
    LookupSessionId { public_id: PublicId },
    LookupPublicId { session_id: SessionId },
}

impl MockIdentityApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a known uin ↔ uid pair.
    pub fn with_pair(self, public_id: impl Into<PublicId>, session_id: impl Into<SessionId>) -> Self {
        let public_id = public_id.into();
        let session_id = session_id.into();
        self.by_public
            .write()
            .unwrap()
            .insert(public_id.clone(), session_id.clone());
        self.by_session
            .write()
            .unwrap()
            .insert(session_id, public_id);
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<IdentityCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl BaseIdentityApi for MockIdentityApi {
    async fn lookup_session_id(&self, public_id: &PublicId) -> Result<Option<SessionId>> {
        self.calls.write().unwrap().push(IdentityCall::LookupSessionId {
            public_id: public_id.clone(),
        });
        Ok(self.by_public.read().unwrap().get(public_id).cloned())
    }

    async fn lookup_public_id(&self, session_id: &SessionId) -> Result<Option<PublicId>> {
        self.calls.write().unwrap().push(IdentityCall::LookupPublicId {
            session_id: session_id.clone(),
        });
        Ok(self.by_session.read().unwrap().get(session_id).cloned())
    }
}

// =============================================================================
// Mock Group API
// =============================================================================

/// Record of a call made to the mock group API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupApiCall {
    GroupMembers {
        group_id: GroupId,
    },
    MemberRecord {
        group_id: GroupId,
        session_id: SessionId,
    },
    SetGroupName {
        group_id: GroupId,
        name: String,
    },
    SetGroupAvatar {
        group_id: GroupId,
        path: PathBuf,
    },
    SetMemberRole {
        group_id: GroupId,
        session_id: SessionId,
        role: MemberRole,
    },
    SetMemberCard {
        group_id: GroupId,
        session_id: SessionId,
        card: String,
    },
    BanMembers {
        group_id: GroupId,
        entries: Vec<MuteEntry>,
    },
    BanGroup {
        group_id: GroupId,
        ban: bool,
    },
    SetSpecialTitle {
        group_id: GroupId,
        session_id: SessionId,
        title: String,
    },
    KickMembers {
        group_id: GroupId,
        session_ids: Vec<SessionId>,
    },
    QuitGroup {
        group_id: GroupId,
    },
}

/// In-memory group domain API with call capture.
#[derive(Default)]
pub struct MockGroupApi {
    members: Arc<RwLock<HashMap<GroupId, Vec<MemberRecord>>>>,
    fail_message: Arc<RwLock<Option<String>>>,
    calls: Arc<RwLock<Vec<GroupApiCall>>>,
}

impl MockGroupApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member record to a group.
    pub fn with_member(self, group_id: GroupId, record: MemberRecord) -> Self {
        self.members
            .write()
            .unwrap()
            .entry(group_id)
            .or_default()
            .push(record);
        self
    }

    /// Make every domain call fail with the given message.
    pub fn failing_with(self, message: impl Into<String>) -> Self {
        *self.fail_message.write().unwrap() = Some(message.into());
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<GroupApiCall> {
        self.calls.read().unwrap().clone()
    }

    fn record(&self, call: GroupApiCall) -> Result<()> {
        self.calls.write().unwrap().push(call);
        match self.fail_message.read().unwrap().as_ref() {
            Some(message) => Err(BridgeError::domain(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BaseGroupApi for MockGroupApi {
    async fn group_members(&self, group_id: &GroupId) -> Result<Vec<MemberRecord>> {
        self.record(GroupApiCall::GroupMembers {
            group_id: group_id.clone(),
        })?;
        Ok(self
            .members
            .read()
            .unwrap()
            .get(group_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn member_record(
        &self,
        group_id: &GroupId,
        session_id: &SessionId,
    ) -> Result<Option<MemberRecord>> {
        self.record(GroupApiCall::MemberRecord {
            group_id: group_id.clone(),
            session_id: session_id.clone(),
        })?;
        Ok(self
            .members
            .read()
            .unwrap()
            .get(group_id)
            .and_then(|records| records.iter().find(|r| &r.session_id == session_id))
            .cloned())
    }

    async fn set_group_name(&self, group_id: &GroupId, name: &str) -> Result<()> {
        self.record(GroupApiCall::SetGroupName {
            group_id: group_id.clone(),
            name: name.to_string(),
        })
    }

    async fn set_group_avatar(&self, group_id: &GroupId, path: &Path) -> Result<()> {
        self.record(GroupApiCall::SetGroupAvatar {
            group_id: group_id.clone(),
            path: path.to_path_buf(),
        })
    }

    async fn set_member_role(
        &self,
        group_id: &GroupId,
        session_id: &SessionId,
        role: MemberRole,
    ) -> Result<()> {
        self.record(GroupApiCall::SetMemberRole {
            group_id: group_id.clone(),
            session_id: session_id.clone(),
            role,
        })
    }

    async fn set_member_card(
        &self,
        group_id: &GroupId,
        session_id: &SessionId,
        card: &str,
    ) -> Result<()> {
        self.record(GroupApiCall::SetMemberCard {
            group_id: group_id.clone(),
            session_id: session_id.clone(),
            card: card.to_string(),
        })
    }

    async fn ban_members(&self, group_id: &GroupId, entries: &[MuteEntry]) -> Result<()> {
        self.record(GroupApiCall::BanMembers {
            group_id: group_id.clone(),
            entries: entries.to_vec(),
        })
    }

    async fn ban_group(&self, group_id: &GroupId, ban: bool) -> Result<()> {
        self.record(GroupApiCall::BanGroup {
            group_id: group_id.clone(),
            ban,
        })
    }

    async fn set_special_title(
        &self,
        group_id: &GroupId,
        session_id: &SessionId,
        title: &str,
    ) -> Result<()> {
        self.record(GroupApiCall::SetSpecialTitle {
            group_id: group_id.clone(),
            session_id: session_id.clone(),
            title: title.to_string(),
        })
    }

    async fn kick_members(&self, group_id: &GroupId, session_ids: &[SessionId]) -> Result<()> {
        self.record(GroupApiCall::KickMembers {
            group_id: group_id.clone(),
            session_ids: session_ids.to_vec(),
        })
    }

    async fn quit_group(&self, group_id: &GroupId) -> Result<()> {
        self.record(GroupApiCall::QuitGroup {
            group_id: group_id.clone(),
        })
    }
}

// =============================================================================
// Mock File Cache
// =============================================================================

/// Record of a call made to the mock file cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileCacheCall {
    ResolveCacheId { reference: FileReference },
    LocalPath { cache_id: String },
}

/// File cache that assigns sequential cache ids under a fixed root.
///
/// Pre-resolved references keep their cache id; everything else gets
/// `cache-1`, `cache-2`, ... in call order. Paths are `/tmp/file-cache/<id>`.
#[derive(Default)]
pub struct MockFileCache {
    next_id: Arc<RwLock<u64>>,
    fail_message: Arc<RwLock<Option<String>>>,
    calls: Arc<RwLock<Vec<FileCacheCall>>>,
}

impl MockFileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every cache call fail with the given message.
    pub fn failing_with(self, message: impl Into<String>) -> Self {
        *self.fail_message.write().unwrap() = Some(message.into());
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<FileCacheCall> {
        self.calls.read().unwrap().clone()
    }

    fn fail_if_configured(&self) -> Result<()> {
        match self.fail_message.read().unwrap().as_ref() {
            Some(message) => Err(BridgeError::file_resolution(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BaseFileCache for MockFileCache {
    async fn resolve_cache_id(&self, reference: &FileReference) -> Result<String> {
        self.calls.write().unwrap().push(FileCacheCall::ResolveCacheId {
            reference: reference.clone(),
        });
        self.fail_if_configured()?;

        if let FileReference::CacheId { cache_id } = reference {
            return Ok(cache_id.clone());
        }
        let mut next = self.next_id.write().unwrap();
        *next += 1;
        Ok(format!("cache-{}", *next))
    }

    async fn local_path(&self, cache_id: &str) -> Result<PathBuf> {
        self.calls.write().unwrap().push(FileCacheCall::LocalPath {
            cache_id: cache_id.to_string(),
        });
        self.fail_if_configured()?;
        Ok(PathBuf::from("/tmp/file-cache").join(cache_id))
    }
}
