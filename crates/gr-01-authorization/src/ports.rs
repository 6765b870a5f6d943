//! # Profile Directory Port
//!
//! Outbound port to the external profile collaborator. Profile lookup is
//! synchronous: it is not one of the engine's suspension points.

use crate::role::Role;
use shared_types::Principal;
use std::collections::HashMap;
use std::sync::Mutex;

/// External profile collaborator - outbound port.
pub trait ProfileDirectory: Send + Sync {
    /// Resolve a principal to its role. Principals without a profile
    /// resolve to no role at all, distinct from `Role::Anonymous`.
    fn resolve_role(&self, caller: &Principal) -> Option<Role>;

    /// True if the principal has any profile.
    fn exists(&self, caller: &Principal) -> bool {
        self.resolve_role(caller).is_some()
    }
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// In-memory profile directory for tests.
#[derive(Default)]
pub struct MockProfileDirectory {
    profiles: Mutex<HashMap<Principal, Role>>,
}

impl MockProfileDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a principal as a reviewer.
    pub fn register_reviewer(&self, caller: Principal, profile_id: u64) {
        self.profiles
            .lock()
            .expect("profile directory poisoned")
            .insert(caller, Role::Reviewer(profile_id));
    }

    /// Register a principal as an admin.
    pub fn register_admin(&self, caller: Principal, profile_id: u64) {
        self.profiles
            .lock()
            .expect("profile directory poisoned")
            .insert(caller, Role::Admin(profile_id));
    }
}

impl ProfileDirectory for MockProfileDirectory {
    fn resolve_role(&self, caller: &Principal) -> Option<Role> {
        self.profiles
            .lock()
            .expect("profile directory poisoned")
            .get(caller)
            .copied()
    }
}
