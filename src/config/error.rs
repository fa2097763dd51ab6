use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the configuration loader.
///
/// A missing file is not in here: the loader recovers from it by writing the
/// default configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read (only with `ReadPolicy::Strict`).
    #[error("failed to read configuration {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not valid YAML.
    #[error("failed to parse configuration {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize configuration")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to write configuration {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// True for every error that means "the document could not be turned into
    /// (or from) a configuration": parse, serialize and write failures.
    pub fn is_malformed_document(&self) -> bool {
        !matches!(self, ConfigError::Read { .. })
    }
}
