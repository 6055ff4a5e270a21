//! Dispatch outcome types.

use serde::{Deserialize, Serialize};

use crate::error::ActionExecutionError;

/// Feedback shown when a dispatch is requested with nothing selected.
pub const NO_SELECTION_MESSAGE: &str = "No data item selected.";

/// Result of one attempted step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    /// The host performed the action.
    Succeeded { action_id: String },

    /// The host reported a failure for this action.
    Failed(ActionExecutionError),
}

impl StepOutcome {
    pub fn action_id(&self) -> &str {
        match self {
            Self::Succeeded { action_id } => action_id,
            Self::Failed(err) => &err.action_id,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// One line of user-facing feedback.
    pub fn feedback(&self) -> String {
        match self {
            Self::Succeeded { action_id } => format!("Ran action {}", action_id),
            Self::Failed(err) => err.to_string(),
        }
    }
}

/// Result of pressing the compile button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "steps", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// Nothing was selected, so no action ran.
    NoSelection,

    /// Every enabled step was attempted, in order.
    Completed(Vec<StepOutcome>),
}

impl DispatchOutcome {
    /// Attempted steps in execution order. Empty for `NoSelection`.
    pub fn steps(&self) -> &[StepOutcome] {
        match self {
            Self::NoSelection => &[],
            Self::Completed(steps) => steps,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &ActionExecutionError> {
        self.steps().iter().filter_map(|step| match step {
            StepOutcome::Failed(err) => Some(err),
            StepOutcome::Succeeded { .. } => None,
        })
    }

    /// True when a selection existed and no step failed.
    pub fn is_success(&self) -> bool {
        match self {
            Self::NoSelection => false,
            Self::Completed(steps) => steps.iter().all(StepOutcome::is_success),
        }
    }

    /// User-facing feedback, one line per attempted step.
    pub fn feedback(&self) -> Vec<String> {
        match self {
            Self::NoSelection => vec![NO_SELECTION_MESSAGE.to_string()],
            Self::Completed(steps) => steps.iter().map(StepOutcome::feedback).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(action_id: &str, cause: &str) -> StepOutcome {
        StepOutcome::Failed(ActionExecutionError {
            action_id: action_id.to_string(),
            cause: cause.to_string(),
        })
    }

    #[test]
    fn test_no_selection() {
        let outcome = DispatchOutcome::NoSelection;
        assert!(outcome.steps().is_empty());
        assert!(!outcome.is_success());
        assert_eq!(outcome.feedback(), vec!["No data item selected."]);
    }

    #[test]
    fn test_partial_failure() {
        let outcome = DispatchOutcome::Completed(vec![
            StepOutcome::Succeeded {
                action_id: "processing.sequence_align_fourier".to_string(),
            },
            failed("processing.sequence_integrate", "not a sequence"),
        ]);

        assert!(!outcome.is_success());
        let failures: Vec<_> = outcome.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].action_id, "processing.sequence_integrate");
        assert_eq!(
            outcome.feedback(),
            vec![
                "Ran action processing.sequence_align_fourier",
                "Failed processing.sequence_integrate: not a sequence",
            ]
        );
    }

    #[test]
    fn test_empty_completion_is_success() {
        let outcome = DispatchOutcome::Completed(Vec::new());
        assert!(outcome.is_success());
        assert!(outcome.feedback().is_empty());
    }

    #[test]
    fn test_serialization() {
        let outcome = DispatchOutcome::Completed(vec![
            StepOutcome::Succeeded {
                action_id: "processing.gaussian_filter".to_string(),
            },
            failed("processing.median_filter", "boom"),
        ]);

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "completed");
        assert_eq!(json["steps"][0]["status"], "succeeded");
        assert_eq!(json["steps"][0]["action_id"], "processing.gaussian_filter");
        assert_eq!(json["steps"][1]["status"], "failed");
        assert_eq!(json["steps"][1]["cause"], "boom");

        let back: DispatchOutcome = serde_json::from_value(json).unwrap();
        assert_eq!(back, outcome);

        let json = serde_json::to_value(DispatchOutcome::NoSelection).unwrap();
        assert_eq!(json["type"], "no_selection");
    }
}
