//! # Error Taxonomy
//!
//! The engine-wide error type. Every store operation returns
//! `Result<T, EngineError>`; the seven variants map 1:1 onto the fixed
//! numeric codes the outward layer exposes. Errors are values, never
//! panics, except for true internal invariant breaks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by any engine subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum EngineError {
    /// Caller input violates a documented constraint (400).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Caller is the anonymous principal (401).
    #[error("caller is anonymous")]
    Unauthenticated,

    /// Caller is authenticated but lacks the required role or does not
    /// own the target entity (403).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Target entity, or the caller's own profile, does not exist (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Unsupported HTTP method on the asset endpoint (405).
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Valid target in a state that forbids the operation (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal decoding or invariant failure (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Numeric code for the outward envelope.
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Unauthenticated => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::MethodNotAllowed(_) => 405,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
        }
    }

    /// Shorthand for a 400 with a formatted message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Shorthand for a 403 with a formatted message.
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Shorthand for a 404 with a formatted message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Shorthand for a 409 with a formatted message.
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Shorthand for a 500 with a formatted message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result alias used across all subsystems.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EngineError::invalid_input("x").code(), 400);
        assert_eq!(EngineError::Unauthenticated.code(), 401);
        assert_eq!(EngineError::forbidden("x").code(), 403);
        assert_eq!(EngineError::not_found("x").code(), 404);
        assert_eq!(EngineError::MethodNotAllowed("POST".into()).code(), 405);
        assert_eq!(EngineError::conflict("x").code(), 409);
        assert_eq!(EngineError::internal("x").code(), 500);
    }

    #[test]
    fn test_error_display() {
        let err = EngineError::conflict("proposal 3 is completed");
        assert_eq!(err.to_string(), "conflict: proposal 3 is completed");
    }

    #[test]
    fn test_unauthenticated_display() {
        assert_eq!(
            EngineError::Unauthenticated.to_string(),
            "caller is anonymous"
        );
    }
}
