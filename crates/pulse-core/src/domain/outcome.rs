//! Call outcome: result of one GET against one catalog endpoint.
//!
//! Outcomes are transient. They are logged as they happen and folded into a
//! [`RoundSummary`](super::summary::RoundSummary); nothing is retried.

use serde::{Deserialize, Serialize};

use super::catalog::Endpoint;

/// Classification of a call outcome.
///
/// Serialized as SCREAMING_SNAKE_CASE: SUCCESS / FAILED / ERROR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallKind {
    Success,
    Failed,
    Error,
}

/// Outcome of a single endpoint call.
///
/// - `Success`: HTTP 200.
/// - `Failed`: any other HTTP status, with the response body for diagnostics.
/// - `Error`: the request never produced a response (connect, TLS, reset, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallResult {
    Success { status: u16 },
    Failed { status: u16, body: String },
    Error { message: String },
}

impl CallResult {
    /// Classify an HTTP response. Only 200 counts as success.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        if status == 200 {
            CallResult::Success { status }
        } else {
            CallResult::Failed {
                status,
                body: body.into(),
            }
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        CallResult::Error {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> CallKind {
        match self {
            CallResult::Success { .. } => CallKind::Success,
            CallResult::Failed { .. } => CallKind::Failed,
            CallResult::Error { .. } => CallKind::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CallResult::Success { .. })
    }
}

/// An endpoint paired with what happened when it was called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    pub endpoint: Endpoint,
    pub result: CallResult,
}
