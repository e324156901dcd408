//! Capability check in front of every admin action.
//!
//! The catalog has no user model; `AllowAll` keeps the admin pages open.
//! Deployments that need protection plug their own `AdminPolicy` into
//! `CatalogService::with_policy`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    ViewForm,
    Create,
    Update,
    Delete,
}

pub trait AdminPolicy: Send + Sync {
    fn allows(&self, action: AdminAction) -> bool;
}

/// Every admin action is permitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AdminPolicy for AllowAll {
    fn allows(&self, _action: AdminAction) -> bool {
        true
    }
}

/// Catalog can be browsed but not changed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOnly;

impl AdminPolicy for ReadOnly {
    fn allows(&self, _action: AdminAction) -> bool {
        false
    }
}
