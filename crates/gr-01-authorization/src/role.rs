//! # Caller Roles
//!
//! The three roles a caller can resolve to.

use serde::{Deserialize, Serialize};
use shared_types::ProfileId;

/// Resolved role of a caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// The anonymous principal; never reaches a profile lookup.
    Anonymous,
    /// A vetted reviewer with the given profile.
    Reviewer(ProfileId),
    /// An administrator with the given profile.
    Admin(ProfileId),
}

impl Role {
    /// Profile id behind this role, if any.
    pub fn profile_id(&self) -> Option<ProfileId> {
        match self {
            Role::Anonymous => None,
            Role::Reviewer(id) | Role::Admin(id) => Some(*id),
        }
    }

    /// True for `Reviewer`.
    pub fn is_reviewer(&self) -> bool {
        matches!(self, Role::Reviewer(_))
    }

    /// True for `Admin`.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin(_))
    }
}
