//! Core types for the basic image processing panel.
//!
//! This crate contains the data shared by the panel and its hosts:
//! - Action toggles and the ordered toggle set
//! - Selection context
//! - Per-step and per-run dispatch outcomes
//! - Panel configuration
//! - Error types

mod config;
mod error;
mod outcome;
mod selection;
mod toggle;

pub use config::{config_dir, config_path, PanelConfig, PanelPosition, ToggleConfig};
pub use error::{ActionExecutionError, ConfigError, HostError, ToggleError};
pub use outcome::{DispatchOutcome, StepOutcome, NO_SELECTION_MESSAGE};
pub use selection::SelectionContext;
pub use toggle::{
    standard_toggles, ActionId, ActionToggle, Category, ToggleSection, ToggleSet,
    ALIGN_FOURIER, ALIGN_SPLINE_FIRST_ORDER, GAUSSIAN_FILTER, INTEGRATE, MEDIAN_FILTER,
};
