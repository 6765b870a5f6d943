//! # Response Envelope
//!
//! The uniform `{ok: T} | {err: {code, message}}` wrapper returned by
//! every outward-facing operation. The envelope carries the exact store
//! error code and message; nothing is collapsed into a generic internal
//! error on the way out.

use crate::errors::EngineError;
use serde::{Deserialize, Serialize};

/// Wire form of an engine error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Numeric code from the fixed taxonomy.
    pub code: u16,
    /// Human-readable message.
    pub message: String,
}

/// The uniform outward response envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiResponse<T> {
    /// Successful result.
    Ok(T),
    /// Failed result with the exact taxonomy code.
    Err(ErrorPayload),
}

impl<T> ApiResponse<T> {
    /// True if the envelope carries a success.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Unwrap the success value, panicking on error (test helper).
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => panic!("called unwrap on err envelope: {} {}", e.code, e.message),
        }
    }

    /// Error code, if this envelope carries a failure.
    pub fn err_code(&self) -> Option<u16> {
        match self {
            Self::Ok(_) => None,
            Self::Err(e) => Some(e.code),
        }
    }
}

impl<T> From<Result<T, EngineError>> for ApiResponse<T> {
    fn from(result: Result<T, EngineError>) -> Self {
        match result {
            Ok(v) => Self::Ok(v),
            Err(e) => Self::Err(ErrorPayload {
                code: e.code(),
                message: e.to_string(),
            }),
        }
    }
}
