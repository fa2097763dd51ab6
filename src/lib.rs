#![forbid(unsafe_code)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Launcher: loads a YAML configuration file, bootstrapping a default one when
//! none exists.
//!
//! Modules:
//! - `config`: the configuration model, loader and saver.
//! - `utils`: console log formatting.

/// Public module: configuration (model, load/save).
pub mod config;
/// Public module: utilities (console log format).
pub mod utils;

/// Crate-level constants used by the CLI.
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a plain level name (trace|debug|info|warn|error), case-insensitive.
pub fn parse_level(s: &str) -> Option<tracing::Level> {
    use tracing::Level;

    match s.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Initialize tracing with the console format.
/// - Honors the `RUST_LOG` environment variable if it holds a plain level.
/// - Falls back to `info` level.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init_tracing() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| parse_level(&s))
        .unwrap_or(tracing::Level::INFO);

    init_tracing_with_level(level);
}

/// Initialize tracing with the console format at an explicit level.
pub fn init_tracing_with_level(level: tracing::Level) {
    // `with_ansi` only exists while the builder still holds the stock `Format`.
    // Ignore the error if the global subscriber was already set.
    let _ = tracing_subscriber::fmt()
        .with_ansi(false)
        .event_format(utils::console::PrefixedFormat)
        .with_writer(std::io::stdout)
        .with_max_level(level)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn parse_level_accepts_known_names() {
        assert_eq!(parse_level("TRACE"), Some(Level::TRACE));
        assert_eq!(parse_level(" warning "), Some(Level::WARN));
        assert_eq!(parse_level("error"), Some(Level::ERROR));
        assert_eq!(parse_level("launcher=debug"), None);
    }
}
