//! Host collaborator contract.

use bip_core::{HostError, SelectionContext};

/// Capabilities the panel needs from the host application.
///
/// The host owns all data items and the current selection. The panel only
/// reads whether something is selected and asks the host to run named
/// actions against it.
#[cfg_attr(test, mockall::automock)]
pub trait ActionHost {
    /// The host's current selection.
    fn selection(&self) -> SelectionContext;

    /// Perform a registered action against the current selection.
    fn perform_action(&mut self, action_id: &str) -> Result<(), HostError>;

    fn has_selection(&self) -> bool {
        !self.selection().is_empty()
    }
}
