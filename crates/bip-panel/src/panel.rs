//! Panel state and event handlers.
//!
//! The host builds the actual widgets. It asks the panel for its layout,
//! forwards checkbox clicks to `set_checked`, and calls `compile` when the
//! compile button is pressed.

use parking_lot::RwLock;

use bip_core::{ConfigError, DispatchOutcome, PanelConfig, ToggleError, ToggleSet};

use crate::dispatch::dispatch;
use crate::host::ActionHost;

/// A checkbox in the panel layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub label: String,
    pub action_id: String,
    pub checked: bool,
}

/// A titled group of checkboxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSection {
    pub title: String,
    pub entries: Vec<PanelEntry>,
}

/// The basic image processing panel.
pub struct Panel {
    panel_id: String,
    title: String,

    /// Checkbox state, mutated by UI callbacks.
    toggles: RwLock<ToggleSet>,

    /// Outcome of the most recent compile, for feedback display.
    last_outcome: RwLock<Option<DispatchOutcome>>,
}

impl Panel {
    /// Create a panel from its configuration. All checkboxes start unchecked.
    pub fn new(config: &PanelConfig) -> Result<Self, ConfigError> {
        let toggles = config.toggle_set()?;
        tracing::debug!(
            "Created panel '{}' with {} toggles",
            config.panel_id,
            toggles.len()
        );
        Ok(Self {
            panel_id: config.panel_id.clone(),
            title: config.title.clone(),
            toggles: RwLock::new(toggles),
            last_outcome: RwLock::new(None),
        })
    }

    pub fn panel_id(&self) -> &str {
        &self.panel_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Handle a checkbox click.
    pub fn set_checked(&self, action_id: &str, checked: bool) -> Result<(), ToggleError> {
        self.toggles.write().set_enabled(action_id, checked)?;
        tracing::debug!("Toggle '{}' set to {}", action_id, checked);
        Ok(())
    }

    pub fn is_checked(&self, action_id: &str) -> bool {
        self.toggles.read().is_enabled(action_id)
    }

    /// Snapshot of the current checkbox state.
    pub fn toggles(&self) -> ToggleSet {
        self.toggles.read().clone()
    }

    /// Sections and checkboxes in display order.
    pub fn layout(&self) -> Vec<PanelSection> {
        self.toggles
            .read()
            .sections()
            .into_iter()
            .map(|section| PanelSection {
                title: section.title().to_string(),
                entries: section
                    .toggles
                    .iter()
                    .map(|t| PanelEntry {
                        label: t.label().to_string(),
                        action_id: t.action_id().to_string(),
                        checked: t.enabled(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Handle the compile button: run the checked steps on the host.
    pub fn compile<H>(&self, host: &mut H) -> DispatchOutcome
    where
        H: ActionHost + ?Sized,
    {
        // Snapshot so checkbox callbacks never wait on a running dispatch.
        let toggles = self.toggles();
        let outcome = dispatch(host, &toggles);
        *self.last_outcome.write() = Some(outcome.clone());
        outcome
    }

    pub fn last_outcome(&self) -> Option<DispatchOutcome> {
        self.last_outcome.read().clone()
    }

    /// Feedback lines for the most recent compile.
    pub fn feedback(&self) -> Vec<String> {
        self.last_outcome
            .read()
            .as_ref()
            .map(DispatchOutcome::feedback)
            .unwrap_or_default()
    }
}
