//! Shared helpers for the demo binaries.

use tracing::Level;

/// Installs a plain stdout logger for the demos.
pub fn setup_logger() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();
}
