use std::fs;
use std::io;
use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, info, warn};

use super::error::ConfigError;
use super::models::Config;

/// Path used when the caller does not pick one, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// How read failures other than "not found" are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadPolicy {
    /// Any read failure counts as a missing file and the default is written.
    #[default]
    Lenient,
    /// Only a missing file triggers the default; other read failures are errors.
    Strict,
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from an existing file.
    File,
    /// Built from the defaults and persisted because no file could be read.
    Generated,
}

/// Result of [`load_or_init`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Parse a configuration from a YAML string.
pub fn load_from_str(s: &str) -> Result<Config, ConfigError> {
    parse_document(s, Path::new("<string>"))
}

/// Render a configuration as a YAML document.
pub fn to_yaml_string(config: &Config) -> Result<String, ConfigError> {
    serde_yaml::to_string(config).map_err(ConfigError::Serialize)
}

/// Load the configuration at `path` with the default (lenient) read policy.
pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<LoadedConfig, ConfigError> {
    load_or_init_with(path, ReadPolicy::default())
}

/// Load the configuration at `path`, writing the default there if it cannot be read.
///
/// A file that was read but does not parse is an error and is left as is.
pub fn load_or_init_with<P: AsRef<Path>>(
    path: P,
    policy: ReadPolicy,
) -> Result<LoadedConfig, ConfigError> {
    let path = path.as_ref();
    info!(target: "launcher::config", "Loading configuration: {}", path.display());

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            if err.kind() != io::ErrorKind::NotFound {
                if policy == ReadPolicy::Strict {
                    return Err(ConfigError::Read {
                        path: path.to_path_buf(),
                        source: err,
                    });
                }
                warn!(
                    target: "launcher::config",
                    "Could not read {} ({err}), treating it as missing",
                    path.display()
                );
            }

            info!(
                target: "launcher::config",
                "No configuration found, generating default configuration"
            );
            let config = Config::default();
            save_to_path(&config, path)?;
            return Ok(LoadedConfig {
                config,
                source: ConfigSource::Generated,
            });
        }
    };

    // Undecodable bytes become U+FFFD instead of failing the whole load.
    let text = String::from_utf8_lossy(&bytes);
    let config = parse_document(&text, path)?;
    debug!(
        target: "launcher::config",
        kind = config.kind(),
        "Parsed configuration from {}",
        path.display()
    );
    Ok(LoadedConfig {
        config,
        source: ConfigSource::File,
    })
}

/// Load the configuration at `path`, discarding where it came from.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    load_or_init(path).map(|loaded| loaded.config)
}

/// Serialize `config` and overwrite `path` with it.
pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let doc = to_yaml_string(config)?;
    fs::write(path, doc).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(target: "launcher::config", "Saved configuration: {}", path.display());
    Ok(())
}

fn parse_document(text: &str, path: &Path) -> Result<Config, ConfigError> {
    let root: Value = serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Config::from(root))
}
