//! Configuration module for the launcher.
//!
//! Loads `config.yaml` (or any path the caller picks), bootstrapping it with the
//! default document when it cannot be read, and saves configurations back.
//!
//! Example:
//! use launcher::config::{load_or_init, ConfigSource};
//!
//! let loaded = load_or_init("config.yaml")?;
//! if loaded.source == ConfigSource::Generated { /* fresh install */ }

pub mod error;
pub mod loader;
pub mod models;

pub use error::ConfigError;
pub use models::{Config, DEFAULT_VERSION};

pub use loader::{
    ConfigSource, DEFAULT_CONFIG_PATH, LoadedConfig, ReadPolicy, load, load_from_str,
    load_or_init, load_or_init_with, save_to_path, to_yaml_string,
};
