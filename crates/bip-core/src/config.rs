//! Panel configuration.
//!
//! The panel works without any configuration file. An optional
//! `panel.toml` in the config directory can relabel, reorder, or replace the
//! offered toggles and change where the host docks the panel.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::toggle::{standard_toggles, ActionToggle, Category, ToggleSet};

/// Dock position offered to the host's workspace manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPosition {
    Left,
    Right,
}

/// One configured toggle.
///
/// Toggles always start unchecked, so there is no `enabled` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleConfig {
    pub label: String,
    pub action_id: String,
    pub category: Category,
}

impl From<&ActionToggle> for ToggleConfig {
    fn from(toggle: &ActionToggle) -> Self {
        Self {
            label: toggle.label().to_string(),
            action_id: toggle.action_id().to_string(),
            category: toggle.category(),
        }
    }
}

/// Panel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Identifier the panel type is registered under.
    #[serde(default = "default_panel_id")]
    pub panel_id: String,

    /// Panel title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Positions the panel may be docked at.
    #[serde(default = "default_positions")]
    pub positions: Vec<PanelPosition>,

    /// Position used when the panel is first shown.
    #[serde(default = "default_position")]
    pub default_position: PanelPosition,

    /// Toggles in pipeline order.
    #[serde(default = "default_toggles")]
    pub toggles: Vec<ToggleConfig>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            panel_id: default_panel_id(),
            title: default_title(),
            positions: default_positions(),
            default_position: default_position(),
            toggles: default_toggles(),
        }
    }
}

impl PanelConfig {
    /// Parse a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&source)
    }

    /// Load from the default location, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Build the toggle set described by this configuration.
    pub fn toggle_set(&self) -> Result<ToggleSet, ConfigError> {
        ToggleSet::new(
            self.toggles
                .iter()
                .map(|t| ActionToggle::new(t.label.clone(), t.action_id.as_str(), t.category))
                .collect(),
        )
    }
}

fn default_panel_id() -> String {
    "basic-image-processing-panel".to_string()
}

fn default_title() -> String {
    "Basic Image Processing".to_string()
}

fn default_positions() -> Vec<PanelPosition> {
    vec![PanelPosition::Left, PanelPosition::Right]
}

fn default_position() -> PanelPosition {
    PanelPosition::Right
}

fn default_toggles() -> Vec<ToggleConfig> {
    standard_toggles().iter().map(ToggleConfig::from).collect()
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("bip"))
}

/// Get the path to panel.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("panel.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toggle::{GAUSSIAN_FILTER, INTEGRATE};
    use std::io::Write;

    #[test]
    fn test_default_matches_standard_set() {
        let config = PanelConfig::default();
        assert_eq!(config.panel_id, "basic-image-processing-panel");
        assert_eq!(config.title, "Basic Image Processing");
        assert_eq!(config.positions, vec![PanelPosition::Left, PanelPosition::Right]);
        assert_eq!(config.default_position, PanelPosition::Right);
        assert_eq!(config.toggle_set().unwrap(), ToggleSet::standard());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = PanelConfig::from_toml("").unwrap();
        assert_eq!(config, PanelConfig::default());
    }

    #[test]
    fn test_custom_toggles() {
        let config = PanelConfig::from_toml(
            r#"
            title = "Quick Filters"
            default_position = "left"

            [[toggles]]
            label = "Integrate"
            action_id = "processing.sequence_integrate"
            category = "integrate"

            [[toggles]]
            label = "Blur"
            action_id = "processing.gaussian_filter"
            category = "filter"
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Quick Filters");
        assert_eq!(config.default_position, PanelPosition::Left);
        assert_eq!(config.panel_id, "basic-image-processing-panel");

        let set = config.toggle_set().unwrap();
        let ids: Vec<&str> = set.iter().map(|t| t.action_id()).collect();
        assert_eq!(ids, vec![INTEGRATE, GAUSSIAN_FILTER]);
        assert_eq!(set.get(GAUSSIAN_FILTER).unwrap().label(), "Blur");
        assert_eq!(set.enabled_count(), 0);
    }

    #[test]
    fn test_duplicate_toggle_is_rejected() {
        let config = PanelConfig::from_toml(
            r#"
            [[toggles]]
            label = "A"
            action_id = "processing.median_filter"
            category = "filter"

            [[toggles]]
            label = "B"
            action_id = "processing.median_filter"
            category = "filter"
            "#,
        )
        .unwrap();

        assert!(matches!(
            config.toggle_set(),
            Err(ConfigError::DuplicateActionId(_))
        ));
    }

    #[test]
    fn test_filter_before_align_is_rejected() {
        let config = PanelConfig::from_toml(
            r#"
            [[toggles]]
            label = "Median Filter"
            action_id = "processing.median_filter"
            category = "filter"

            [[toggles]]
            label = "Align (Fourier)"
            action_id = "processing.sequence_align_fourier"
            category = "align"
            "#,
        )
        .unwrap();

        assert!(matches!(
            config.toggle_set(),
            Err(ConfigError::CategoryOrder { category: "Align", after: "Filters", .. })
        ));
    }

    #[test]
    fn test_invalid_category() {
        let result = PanelConfig::from_toml(
            r#"
            [[toggles]]
            label = "FFT"
            action_id = "processing.fft"
            category = "transform"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "panel_id = \"bip-test\"").unwrap();

        let config = PanelConfig::load_from(file.path()).unwrap();
        assert_eq!(config.panel_id, "bip-test");
        assert_eq!(config.toggles.len(), 5);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PanelConfig::load_from(&dir.path().join("panel.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
