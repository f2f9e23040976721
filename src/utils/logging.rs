use tracing::Level;

use crate::utils::error::{Error, Result};

/// Initialize tracing/logging for the embedding application.
///
/// Uses a simple `with_max_level` configuration based on `level`.
/// Uses `try_init` so tests and libraries can call this multiple times
/// without panicking.
pub fn init(level: &str) -> Result<()> {
    let lvl = parse_level(level)?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(lvl)
        .with_target(false)
        .try_init();
    Ok(())
}

fn parse_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" | "warning" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(Error::InvalidLogLevel(other.to_string())),
    }
}
