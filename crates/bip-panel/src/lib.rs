//! Basic image processing panel.
//!
//! This crate provides:
//! - `ActionHost` - the host capabilities the panel relies on
//! - `compile_and_run` / `dispatch` - ordered dispatch of enabled toggles
//! - `Panel` - checkbox state and the compile button handler
//! - `PanelTypeRegistry` / `PanelManager` / `Plugin` - panel registration
//! - Tracing setup for binaries embedding the panel

pub mod dispatch;
pub mod host;
pub mod logging;
pub mod panel;
pub mod registry;

pub use dispatch::{compile_and_run, dispatch};
pub use host::ActionHost;
pub use panel::{Panel, PanelEntry, PanelSection};
pub use registry::{PanelManager, PanelTypeRegistry, Plugin, RegistryError};

// Re-export bip_core types for convenience
pub use bip_core::{
    ActionExecutionError, DispatchOutcome, HostError, PanelConfig, SelectionContext, StepOutcome,
    ToggleError, ToggleSet,
};
