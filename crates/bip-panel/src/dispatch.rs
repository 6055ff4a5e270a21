//! Ordered dispatch of enabled toggles.
//!
//! A dispatch is a single linear pass: every enabled toggle is attempted
//! once, in toggle set order, on the calling thread. A failing step is
//! recorded and the pass moves on to the next enabled toggle.

use std::fmt;

use bip_core::{
    ActionExecutionError, DispatchOutcome, SelectionContext, StepOutcome, ToggleSet,
    NO_SELECTION_MESSAGE,
};
use uuid::Uuid;

use crate::host::ActionHost;

/// Run every enabled toggle's action against the current selection.
///
/// Returns `DispatchOutcome::NoSelection` without invoking anything when the
/// selection is empty. Otherwise returns one `StepOutcome` per enabled toggle,
/// in order. Partial failure is reported in the outcome list, never raised.
pub fn compile_and_run<F, E>(
    selection: &SelectionContext,
    toggles: &ToggleSet,
    mut perform_action: F,
) -> DispatchOutcome
where
    F: FnMut(&str) -> Result<(), E>,
    E: fmt::Display,
{
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("dispatch", %run_id);
    let _enter = span.enter();

    if selection.is_empty() {
        tracing::warn!("{}", NO_SELECTION_MESSAGE);
        return DispatchOutcome::NoSelection;
    }

    let mut steps = Vec::new();
    for action_id in toggles.enabled_in_order() {
        match perform_action(action_id) {
            Ok(()) => {
                tracing::info!("Ran action {}", action_id);
                steps.push(StepOutcome::Succeeded {
                    action_id: action_id.to_string(),
                });
            }
            Err(e) => {
                let err = ActionExecutionError {
                    action_id: action_id.to_string(),
                    cause: e.to_string(),
                };
                tracing::warn!("{}", err);
                steps.push(StepOutcome::Failed(err));
            }
        }
    }

    let outcome = DispatchOutcome::Completed(steps);
    tracing::debug!(
        attempted = outcome.steps().len(),
        failed = outcome.failures().count(),
        "Dispatch finished"
    );
    outcome
}

/// Read the host's selection and run the enabled toggles against it.
pub fn dispatch<H>(host: &mut H, toggles: &ToggleSet) -> DispatchOutcome
where
    H: ActionHost + ?Sized,
{
    let selection = host.selection();
    compile_and_run(&selection, toggles, |action_id| host.perform_action(action_id))
}
