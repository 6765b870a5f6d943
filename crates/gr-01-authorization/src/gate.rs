//! # Authorization Gate
//!
//! Policy checks consumed by every mutating store operation. The check
//! order is fixed: anonymous callers fail 401 before the profile
//! collaborator is consulted at all.

use crate::ports::ProfileDirectory;
use crate::role::Role;
use shared_types::{EngineError, EngineResult, Principal, ProfileId};
use std::sync::Arc;

/// Resolves callers to roles and enforces role requirements.
#[derive(Clone)]
pub struct AuthorizationGate {
    profiles: Arc<dyn ProfileDirectory>,
}

impl AuthorizationGate {
    /// Create a gate over a profile directory.
    pub fn new(profiles: Arc<dyn ProfileDirectory>) -> Self {
        Self { profiles }
    }

    /// Resolve a caller to its role.
    ///
    /// Anonymous principals resolve to `Role::Anonymous` without a
    /// profile lookup; unknown authenticated principals resolve to no
    /// role (`None`).
    pub fn resolve(&self, caller: &Principal) -> Option<Role> {
        if caller.is_anonymous() {
            return Some(Role::Anonymous);
        }
        self.profiles.resolve_role(caller)
    }

    /// Require that the caller has a profile at all.
    ///
    /// # Errors
    /// - 401 if the caller is anonymous
    /// - 404 if the caller has no profile
    pub fn require_profile(&self, caller: &Principal) -> EngineResult<Role> {
        if caller.is_anonymous() {
            return Err(EngineError::Unauthenticated);
        }
        self.profiles.resolve_role(caller).ok_or_else(|| {
            tracing::debug!(caller = %caller, "authenticated caller has no profile");
            EngineError::not_found(format!("no profile for caller {caller}"))
        })
    }

    /// Require the `Reviewer` role.
    ///
    /// # Errors
    /// - 401 if the caller is anonymous
    /// - 404 if the caller has no profile
    /// - 403 if the caller's role is not `Reviewer`
    pub fn require_reviewer(&self, caller: &Principal) -> EngineResult<ProfileId> {
        match self.require_profile(caller)? {
            Role::Reviewer(id) => Ok(id),
            _ => Err(EngineError::forbidden(format!(
                "caller {caller} is not a reviewer"
            ))),
        }
    }

    /// Require the `Admin` role.
    ///
    /// # Errors
    /// - 401 if the caller is anonymous
    /// - 404 if the caller has no profile
    /// - 403 if the caller's role is not `Admin`
    pub fn require_admin(&self, caller: &Principal) -> EngineResult<ProfileId> {
        match self.require_profile(caller)? {
            Role::Admin(id) => Ok(id),
            _ => Err(EngineError::forbidden(format!(
                "caller {caller} is not an admin"
            ))),
        }
    }
}
