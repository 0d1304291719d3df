//! Structured logging for simulation runs.
//!
//! The engine emits `tracing` events at three levels:
//!
//! - **TRACE**: every processed event with its time, kind, busy agents, and queue length (very verbose)
//! - **DEBUG**: start and end of each run
//! - **INFO**: completion of each scenario in a batch
//!
//! Nothing is printed unless a subscriber is installed. The functions here install a formatted one whose filter honors
//! `RUST_LOG` when set, e.g. `RUST_LOG=mmc_sim=trace`.

use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a subscriber at `info` level.
pub fn init_simulation_logging() {
    init_simulation_logging_with_level("info")
}

/// Install a subscriber at `level` ("trace", "debug", "info", "warn", or "error") unless `RUST_LOG` says otherwise.
///
/// Calling this when a global subscriber already exists does nothing.
pub fn init_simulation_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level, "Simulation logging initialized");
    }
}
