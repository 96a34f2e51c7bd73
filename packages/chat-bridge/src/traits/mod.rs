//! Collaborator interfaces consumed by the bridge.
//!
//! These are INFRASTRUCTURE traits only. The platform implements them, the
//! bridge orchestrates them. All are injected as `Arc<dyn ...>` at
//! construction; `testing` provides call-recording mocks for each.
//!
//! Naming convention: Base* for trait names (e.g., BaseGroupApi)

pub mod file_cache;
pub mod group;
pub mod identity;
