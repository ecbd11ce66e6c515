//! Serializable success-or-failure envelope for foreign callers.

use serde::{Deserialize, Serialize};

use super::Assignment;
use crate::error::AssignmentError;

/// `{"hasError": false, "assignments": [...]}` on success,
/// `{"hasError": true, "message": "..."}` on failure.
///
/// Used where a Rust `Result` cannot cross the boundary (JavaScript, C).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentOutcome {
    has_error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assignments: Option<Vec<Assignment>>,
}

impl AssignmentOutcome {
    /// Successful seating.
    pub fn success(assignments: Vec<Assignment>) -> Self {
        Self {
            has_error: false,
            message: None,
            assignments: Some(assignments),
        }
    }

    /// Failure with a message for the end user.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            has_error: true,
            message: Some(message.into()),
            assignments: None,
        }
    }

    /// Whether this is a failure.
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Failure message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Assignments, if successful.
    pub fn assignments(&self) -> Option<&[Assignment]> {
        self.assignments.as_deref()
    }
}

impl From<Result<Vec<Assignment>, AssignmentError>> for AssignmentOutcome {
    fn from(result: Result<Vec<Assignment>, AssignmentError>) -> Self {
        match result {
            Ok(assignments) => Self::success(assignments),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}
