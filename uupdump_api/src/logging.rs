//! Logging setup for applications that do not install their own subscriber.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs a global `fmt` subscriber logging this crate at `level`.
///
/// `RUST_LOG`, when set, takes precedence over `level`. Returns `false` if a
/// global subscriber was already installed, in which case nothing changes.
pub fn configure_logging(level: Level) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "uupdump_api={}",
            level.as_str().to_ascii_lowercase()
        ))
    });
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::info!("Logging configured at level {}", level);
    }
    installed
}
