//! Simulated host for the basic image processing panel.
//!
//! Loads the panel configuration, registers the panel type, opens the panel,
//! checks every toggle, and presses compile with and without a selection.

mod host;

use bip_core::PanelConfig;
use bip_panel::{logging::init_tracing, Panel, PanelManager, Plugin, RegistryError};

use host::SimulatedHost;

fn main() {
    init_tracing();

    let config = match PanelConfig::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default panel configuration: {}", e);
            PanelConfig::default()
        }
    };

    if let Err(e) = run(config) {
        tracing::error!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}

fn run(config: PanelConfig) -> Result<(), RegistryError> {
    let manager = PanelManager::new();
    let plugin = Plugin::new(config);
    plugin.run(&manager)?;

    let panel = manager.open(&plugin.config().panel_id)?;
    print_layout(&panel);

    for toggle in panel.toggles().iter() {
        if let Err(e) = panel.set_checked(toggle.action_id(), true) {
            tracing::error!("Could not check '{}': {}", toggle.label(), e);
        }
    }

    let mut host = SimulatedHost::new();

    println!("-- compile with nothing selected");
    panel.compile(&mut host);
    print_feedback(&panel);

    println!("-- compile with one item selected");
    host.select(1);
    panel.compile(&mut host);
    print_feedback(&panel);

    plugin.stop(&manager)
}

fn print_layout(panel: &Panel) {
    println!("{}", panel.title());
    for section in panel.layout() {
        println!("  {}", section.title);
        for entry in section.entries {
            let mark = if entry.checked { "x" } else { " " };
            println!("    [{}] {}", mark, entry.label);
        }
    }
}

fn print_feedback(panel: &Panel) {
    for line in panel.feedback() {
        println!("  {}", line);
    }
}
