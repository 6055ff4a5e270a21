//! Tracing setup.

/// Initialize the tracing subscriber for structured logging.
///
/// Log levels can be controlled via the `RUST_LOG` environment variable:
/// - `RUST_LOG=debug` - Enable debug logs for all modules
/// - `RUST_LOG=info,bip_panel=debug` - Info for most, debug for the panel
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    // A host may already have installed a subscriber.
    if let Err(e) = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init()
    {
        tracing::debug!("Keeping existing tracing subscriber: {}", e);
    }
}

fn default_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::new("info,bip_panel=debug,bip_sim=debug")
}
