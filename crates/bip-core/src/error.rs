//! Error types for the panel.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Two toggles share an action id.
    #[error("Duplicate action id: {0}")]
    DuplicateActionId(String),

    /// A toggle was configured without an action id.
    #[error("Toggle '{label}' has an empty action id")]
    EmptyActionId { label: String },

    /// Toggles must run align, then integrate, then filter.
    #[error("Toggle '{action_id}' ({category}) is listed after a {after} toggle")]
    CategoryOrder {
        action_id: String,
        category: &'static str,
        after: &'static str,
    },
}

/// Toggle state errors.
///
/// These indicate a programming error in how the panel was wired up,
/// since the set of toggles is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("Unknown action id: {0}")]
    UnknownAction(String),
}

/// Failure reported by the host when it could not perform an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HostError {
    message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A single dispatch step failed.
///
/// Recorded in the outcome list; never aborts the remaining steps.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Failed {action_id}: {cause}")]
pub struct ActionExecutionError {
    /// Action that was being performed.
    pub action_id: String,

    /// Host-provided description of the failure.
    pub cause: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ActionExecutionError {
            action_id: "processing.median_filter".to_string(),
            cause: "no display item".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed processing.median_filter: no display item"
        );

        let err = ConfigError::CategoryOrder {
            action_id: "processing.sequence_align_fourier".to_string(),
            category: "Align",
            after: "Filters",
        };
        assert_eq!(
            err.to_string(),
            "Toggle 'processing.sequence_align_fourier' (Align) is listed after a Filters toggle"
        );

        let err = ToggleError::UnknownAction("processing.fft".to_string());
        assert_eq!(err.to_string(), "Unknown action id: processing.fft");
    }

    #[test]
    fn test_host_error_message() {
        let err = HostError::new("data item is read-only");
        assert_eq!(err.message(), "data item is read-only");
        assert_eq!(err.to_string(), "data item is read-only");
    }
}
