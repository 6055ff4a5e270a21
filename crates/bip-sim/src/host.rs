//! In-memory stand-in for the host application.

use std::collections::HashSet;

use bip_core::{standard_toggles, HostError, SelectionContext};
use bip_panel::ActionHost;

/// Simulated host with a fixed action registry and a selection count.
pub struct SimulatedHost {
    actions: HashSet<String>,
    failing: HashSet<String>,
    selection: SelectionContext,
    performed: Vec<String>,
}

impl SimulatedHost {
    /// Create a host that knows the standard processing actions.
    pub fn new() -> Self {
        Self {
            actions: standard_toggles()
                .iter()
                .map(|t| t.action_id().to_string())
                .collect(),
            failing: HashSet::new(),
            selection: SelectionContext::empty(),
            performed: Vec::new(),
        }
    }

    /// Select `count` display items.
    pub fn select(&mut self, count: usize) {
        self.selection = SelectionContext::with_items(count);
    }

    /// Make an action fail whenever it is performed.
    pub fn fail_action(&mut self, action_id: impl Into<String>) {
        self.failing.insert(action_id.into());
    }

    /// Actions performed successfully, in order.
    pub fn performed(&self) -> &[String] {
        &self.performed
    }
}

impl Default for SimulatedHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionHost for SimulatedHost {
    fn selection(&self) -> SelectionContext {
        self.selection
    }

    fn perform_action(&mut self, action_id: &str) -> Result<(), HostError> {
        if !self.actions.contains(action_id) {
            return Err(HostError::new("unknown action"));
        }
        if self.failing.contains(action_id) {
            return Err(HostError::new("simulated failure"));
        }
        tracing::debug!("Host performed {}", action_id);
        self.performed.push(action_id.to_string());
        Ok(())
    }
}
