//! Action dispatch: wire action names to typed handlers.
//!
//! The registry maps action name strings (e.g., "kick_member") to handlers
//! that deserialize the typed request, call the matching [`GroupActions`]
//! method, and wrap the result in the response envelope. Dispatch is
//! stateless and single-shot: one request in, one [`ActionReply`] (or one
//! dispatch error) out, no intermediate states.
//!
//! Action failures never escape as errors: a single boundary here converts
//! every [`BridgeError`] into the uniform wire error arm. [`DispatchError`]
//! is reserved for caller defects: an action name the validated schema
//! should have rejected, or a payload that does not match it.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::actions::GroupActions;
use crate::error::{BridgeError, DispatchError};
use crate::types::wire::{
    Ack, ActionReply, KickMemberRequest, ListMemberIdsRequest, MemberInfoRequest,
    MemberInfoResponse, MemberListResponse, MuteAllRequest, MuteMemberRequest, QuitGroupRequest,
    RenameGroupRequest, SetAvatarRequest, SetAvatarResponse, SetCardRequest, SetRoleRequest,
    SetSpecialTitleRequest,
};

/// Type alias for the boxed async handler.
///
/// The typed request and response shapes are captured in the closure when
/// registering; the dispatcher itself only sees JSON values.
type BoxedHandler = Box<
    dyn Fn(serde_json::Value) -> Pin<Box<dyn Future<Output = DispatchResult> + Send>>
        + Send
        + Sync,
>;

type DispatchResult = std::result::Result<ActionReply, DispatchError>;

/// Registry that maps wire action names to handlers.
///
/// Built once at startup over a shared [`GroupActions`]; safe to share via
/// `Arc` across concurrent dispatches with no ordering guarantee between
/// them.
pub struct ActionDispatcher {
    handlers: HashMap<&'static str, BoxedHandler>,
}

impl ActionDispatcher {
    /// Creates a dispatcher with every group administration action
    /// registered.
    pub fn new(actions: Arc<GroupActions>) -> Self {
        let mut dispatcher = Self {
            handlers: HashMap::new(),
        };

        let a = actions.clone();
        dispatcher.register("list_member_ids", move |req: ListMemberIdsRequest| {
            let a = a.clone();
            async move {
                let uins = a.list_member_ids(&req.group_id).await?;
                Ok(MemberListResponse { uins })
            }
        });

        let a = actions.clone();
        dispatcher.register("get_member_info", move |req: MemberInfoRequest| {
            let a = a.clone();
            async move {
                let member = a.member_info(&req.group_id, &req.uin).await?;
                Ok(MemberInfoResponse { member })
            }
        });

        let a = actions.clone();
        dispatcher.register("rename_group", move |req: RenameGroupRequest| {
            let a = a.clone();
            async move {
                a.rename_group(&req.group_id, &req.name).await?;
                Ok(Ack {})
            }
        });

        let a = actions.clone();
        dispatcher.register("set_avatar", move |req: SetAvatarRequest| {
            let a = a.clone();
            async move {
                let cache_id = a.set_avatar(&req.group_id, &req.file).await?;
                Ok(SetAvatarResponse { cache_id })
            }
        });

        let a = actions.clone();
        dispatcher.register("set_role", move |req: SetRoleRequest| {
            let a = a.clone();
            async move {
                a.set_role(&req.group_id, &req.uin, req.operation).await?;
                Ok(Ack {})
            }
        });

        let a = actions.clone();
        dispatcher.register("set_card", move |req: SetCardRequest| {
            let a = a.clone();
            async move {
                a.set_card(&req.group_id, &req.uin, &req.card).await?;
                Ok(Ack {})
            }
        });

        let a = actions.clone();
        dispatcher.register("mute_member", move |req: MuteMemberRequest| {
            let a = a.clone();
            async move {
                a.mute(&req.group_id, &req.uin, req.operation).await?;
                Ok(Ack {})
            }
        });

        let a = actions.clone();
        dispatcher.register("mute_all", move |req: MuteAllRequest| {
            let a = a.clone();
            async move {
                a.mute_all(&req.group_id, req.lift).await?;
                Ok(Ack {})
            }
        });

        let a = actions.clone();
        dispatcher.register("set_special_title", move |req: SetSpecialTitleRequest| {
            let a = a.clone();
            async move {
                a.set_special_title(&req.group_id, &req.uin, &req.title)
                    .await?;
                Ok(Ack {})
            }
        });

        let a = actions.clone();
        dispatcher.register("kick_member", move |req: KickMemberRequest| {
            let a = a.clone();
            async move {
                a.kick_member(&req.group_id, &req.uin).await?;
                Ok(Ack {})
            }
        });

        let a = actions;
        dispatcher.register("quit_group", move |req: QuitGroupRequest| {
            let a = a.clone();
            async move {
                a.quit_group(&req.group_id).await?;
                Ok(Ack {})
            }
        });

        dispatcher
    }

    /// Registers one action with its typed handler.
    fn register<Req, Resp, F, Fut>(&mut self, action: &'static str, handler: F)
    where
        Req: DeserializeOwned + Send + 'static,
        Resp: Serialize + 'static,
        F: Fn(Req) -> Fut + Send + Sync + Clone + 'static,
        Fut: Future<Output = std::result::Result<Resp, BridgeError>> + Send + 'static,
    {
        let boxed: BoxedHandler = Box::new(move |payload| {
            let handler = handler.clone();
            Box::pin(async move {
                let request: Req = serde_json::from_value(payload)
                    .map_err(|source| DispatchError::MalformedPayload { action, source })?;
                match handler(request).await {
                    Ok(response) => Ok(ActionReply::Success(serde_json::to_value(response)?)),
                    Err(error) => {
                        warn!("Action {} failed: {}", action, error);
                        Ok(ActionReply::error(error.to_string()))
                    }
                }
            })
        });

        self.handlers.insert(action, boxed);
    }

    /// Dispatches one action by name.
    ///
    /// Returns an [`ActionReply`] for everything a well-formed caller can
    /// cause, including action failures. Errors here mean the caller is
    /// broken: an unknown action name or a payload the schema forbids.
    pub async fn dispatch(&self, action: &str, payload: serde_json::Value) -> DispatchResult {
        let handler = self
            .handlers
            .get(action)
            .ok_or_else(|| DispatchError::UnknownAction {
                action: action.to_string(),
            })?;
        handler(payload).await
    }

    /// Check if an action name is registered.
    pub fn is_registered(&self, action: &str) -> bool {
        self.handlers.contains_key(action)
    }

    /// Get all registered action names.
    pub fn action_names(&self) -> Vec<&'static str> {
        self.handlers.keys().copied().collect()
    }
}
