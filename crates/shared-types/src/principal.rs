//! # Caller Principal
//!
//! Opaque identity of a caller on the permissioned ledger network.
//!
//! The network reserves one well-known principal for unauthenticated
//! callers; every policy check starts by testing for it before any
//! profile lookup happens.

use serde::{Deserialize, Serialize};

/// Textual form of the reserved anonymous principal.
const ANONYMOUS: &str = "anonymous";

/// An opaque caller identity.
///
/// Principals are compared byte-for-byte; the engine never parses their
/// internal structure.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    /// Create a principal from its textual form.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The reserved anonymous principal.
    pub fn anonymous() -> Self {
        Self(ANONYMOUS.to_string())
    }

    /// True if this is the reserved anonymous principal.
    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS
    }

    /// Textual form of the principal.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
