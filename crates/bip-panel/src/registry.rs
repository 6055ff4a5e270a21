//! Panel type registration.
//!
//! Hosts keep a panel type registry that knows which panels can be opened
//! and where they may be docked. The plugin registers its panel type when
//! the host loads it and unregisters it when the host unloads it.

use parking_lot::RwLock;
use std::collections::HashMap;

use bip_core::{ConfigError, PanelConfig};

use crate::panel::Panel;

/// Errors that can occur during panel registration.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Panel already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Panel not registered: {0}")]
    NotRegistered(String),

    #[error("Invalid panel configuration: {0}")]
    Config(#[from] ConfigError),
}

/// The host's panel type registry.
pub trait PanelTypeRegistry {
    /// Register a panel type described by `config`.
    fn register_panel(&self, config: &PanelConfig) -> Result<(), RegistryError>;

    /// Remove a previously registered panel type.
    fn unregister_panel(&self, panel_id: &str) -> Result<(), RegistryError>;
}

/// In-memory panel type registry.
pub struct PanelManager {
    /// Registered panel configurations by panel ID.
    panels: RwLock<HashMap<String, PanelConfig>>,
}

impl PanelManager {
    /// Create a new empty manager.
    pub fn new() -> Self {
        Self {
            panels: RwLock::new(HashMap::new()),
        }
    }

    /// Open a new instance of a registered panel.
    pub fn open(&self, panel_id: &str) -> Result<Panel, RegistryError> {
        let panels = self.panels.read();
        let config = panels
            .get(panel_id)
            .ok_or_else(|| RegistryError::NotRegistered(panel_id.to_string()))?;
        Ok(Panel::new(config)?)
    }

    pub fn is_registered(&self, panel_id: &str) -> bool {
        self.panels.read().contains_key(panel_id)
    }

    /// Get the count of registered panel types.
    pub fn count(&self) -> usize {
        self.panels.read().len()
    }
}

impl Default for PanelManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelTypeRegistry for PanelManager {
    fn register_panel(&self, config: &PanelConfig) -> Result<(), RegistryError> {
        // Reject broken toggle lists at registration rather than on open.
        config.toggle_set()?;

        let mut panels = self.panels.write();
        if panels.contains_key(&config.panel_id) {
            return Err(RegistryError::AlreadyRegistered(config.panel_id.clone()));
        }
        panels.insert(config.panel_id.clone(), config.clone());
        tracing::info!("Registered panel: {}", config.panel_id);
        Ok(())
    }

    fn unregister_panel(&self, panel_id: &str) -> Result<(), RegistryError> {
        if self.panels.write().remove(panel_id).is_none() {
            return Err(RegistryError::NotRegistered(panel_id.to_string()));
        }
        tracing::info!("Unregistered panel: {}", panel_id);
        Ok(())
    }
}

/// Plugin entry points called by the host on load and unload.
pub struct Plugin {
    config: PanelConfig,
}

impl Plugin {
    pub fn new(config: PanelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Called when the plugin is loaded.
    pub fn run(&self, registry: &dyn PanelTypeRegistry) -> Result<(), RegistryError> {
        registry.register_panel(&self.config)
    }

    /// Called when the plugin is unloaded.
    pub fn stop(&self, registry: &dyn PanelTypeRegistry) -> Result<(), RegistryError> {
        registry.unregister_panel(&self.config.panel_id)
    }
}

impl Default for Plugin {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}
