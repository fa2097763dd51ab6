//! Utilities for the launcher.
//!
//! Submodules:
//! - `console`: the `LEVEL: message` log line format used on the console.

pub mod console;
