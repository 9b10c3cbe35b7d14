//! Core check-result type.

use std::fmt;

/// A single reported violation.
///
/// Every diagnostic a check produces, actual rule violations and recoverable
/// configuration problems alike, is a flat human-readable message. Severity,
/// grouping, and presentation are owned by the host application.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckResult {
    pub message: String,
}

impl CheckResult {
    pub fn new(message: impl Into<String>) -> Self {
        CheckResult {
            message: message.into(),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
