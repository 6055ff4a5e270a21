//! Action toggles and the ordered toggle set.
//!
//! A toggle binds a checkbox to one host action. The order of the set is the
//! processing pipeline: alignment before integration before filtering, and
//! within a category, the order the toggles were listed in.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{ConfigError, ToggleError};

/// Spline (first order) sequence alignment.
pub const ALIGN_SPLINE_FIRST_ORDER: &str = "processing.sequence_align_spline_1";
/// Fourier sequence alignment.
pub const ALIGN_FOURIER: &str = "processing.sequence_align_fourier";
/// Sequence integration.
pub const INTEGRATE: &str = "processing.sequence_integrate";
/// Gaussian filter.
pub const GAUSSIAN_FILTER: &str = "processing.gaussian_filter";
/// Median filter.
pub const MEDIAN_FILTER: &str = "processing.median_filter";

/// Identifier understood by the host's action registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionId(pub String);

impl From<String> for ActionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ActionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ActionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Processing category, used for grouping toggles under a header.
///
/// Variants are declared in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Align,
    Integrate,
    Filter,
}

impl Category {
    /// Section header shown above the category's checkboxes.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Align => "Align",
            Self::Integrate => "Integrate",
            Self::Filter => "Filters",
        }
    }
}

/// A checkbox bound to a host action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionToggle {
    label: String,
    action_id: ActionId,
    category: Category,
    enabled: bool,
}

impl ActionToggle {
    /// Create a toggle. Toggles always start unchecked.
    pub fn new(label: impl Into<String>, action_id: impl Into<ActionId>, category: Category) -> Self {
        Self {
            label: label.into(),
            action_id: action_id.into(),
            category,
            enabled: false,
        }
    }

    /// Display name of the checkbox.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action_id(&self) -> &str {
        self.action_id.as_ref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

/// Consecutive toggles sharing a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSection {
    pub category: Category,
    pub toggles: Vec<ActionToggle>,
}

impl ToggleSection {
    pub fn title(&self) -> &'static str {
        self.category.title()
    }
}

/// Ordered set of toggles.
///
/// Order is fixed at construction. Only the enabled flags change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSet {
    toggles: Vec<ActionToggle>,
}

impl ToggleSet {
    /// Build a toggle set, rejecting empty or duplicate action ids and
    /// categories listed out of pipeline order. Every toggle starts disabled.
    pub fn new(toggles: Vec<ActionToggle>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        let mut previous: Option<&ActionToggle> = None;
        for toggle in &toggles {
            if toggle.action_id().is_empty() {
                return Err(ConfigError::EmptyActionId {
                    label: toggle.label.clone(),
                });
            }
            if !seen.insert(toggle.action_id()) {
                return Err(ConfigError::DuplicateActionId(toggle.action_id().to_string()));
            }
            if let Some(prev) = previous {
                if toggle.category < prev.category {
                    return Err(ConfigError::CategoryOrder {
                        action_id: toggle.action_id().to_string(),
                        category: toggle.category.title(),
                        after: prev.category.title(),
                    });
                }
            }
            previous = Some(toggle);
        }

        let toggles = toggles
            .into_iter()
            .map(|toggle| ActionToggle {
                enabled: false,
                ..toggle
            })
            .collect();
        Ok(Self { toggles })
    }

    /// The five processing steps offered by the panel, all unchecked.
    pub fn standard() -> Self {
        Self {
            toggles: standard_toggles(),
        }
    }

    /// Set the enabled flag for an action.
    pub fn set_enabled(&mut self, action_id: &str, enabled: bool) -> Result<(), ToggleError> {
        let toggle = self
            .toggles
            .iter_mut()
            .find(|t| t.action_id() == action_id)
            .ok_or_else(|| ToggleError::UnknownAction(action_id.to_string()))?;
        toggle.enabled = enabled;
        Ok(())
    }

    /// Enable or disable every toggle.
    pub fn set_all(&mut self, enabled: bool) {
        for toggle in &mut self.toggles {
            toggle.enabled = enabled;
        }
    }

    /// Check whether an action is enabled. Unknown ids are never enabled.
    pub fn is_enabled(&self, action_id: &str) -> bool {
        self.get(action_id).is_some_and(|t| t.enabled)
    }

    pub fn get(&self, action_id: &str) -> Option<&ActionToggle> {
        self.toggles.iter().find(|t| t.action_id() == action_id)
    }

    /// Enabled action ids, in set order.
    ///
    /// The iterator is lazy and borrows the set; clone it (or call this
    /// again) to walk the sequence another time.
    pub fn enabled_in_order(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.toggles
            .iter()
            .filter(|t| t.enabled)
            .map(|t| t.action_id())
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled_in_order().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionToggle> {
        self.toggles.iter()
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }

    /// Group consecutive toggles by category, preserving order.
    pub fn sections(&self) -> Vec<ToggleSection> {
        let mut sections: Vec<ToggleSection> = Vec::new();
        for toggle in &self.toggles {
            match sections.last_mut() {
                Some(section) if section.category == toggle.category => {
                    section.toggles.push(toggle.clone());
                }
                _ => sections.push(ToggleSection {
                    category: toggle.category,
                    toggles: vec![toggle.clone()],
                }),
            }
        }
        sections
    }
}

impl Default for ToggleSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// The panel's built-in processing steps in pipeline order.
pub fn standard_toggles() -> Vec<ActionToggle> {
    vec![
        ActionToggle::new(
            "Align (Spline First Order)",
            ALIGN_SPLINE_FIRST_ORDER,
            Category::Align,
        ),
        ActionToggle::new("Align (Fourier)", ALIGN_FOURIER, Category::Align),
        ActionToggle::new("Integrate", INTEGRATE, Category::Integrate),
        ActionToggle::new("Gaussian Filter", GAUSSIAN_FILTER, Category::Filter),
        ActionToggle::new("Median Filter", MEDIAN_FILTER, Category::Filter),
    ]
}
