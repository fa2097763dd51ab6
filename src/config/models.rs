use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Version written into a freshly generated configuration.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Root configuration document.
///
/// Whatever the YAML document holds at its root, passed through untouched.
/// In practice this is a mapping of top-level keys (kept in source order), and
/// the key accessors only answer for that case; a sequence or scalar root is
/// still a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    root: Value,
}

impl Default for Config {
    /// The built-in fallback: `{version: "0.0.0"}`.
    fn default() -> Self {
        let mut entries = Mapping::new();
        entries.insert(
            Value::String("version".into()),
            Value::String(DEFAULT_VERSION.into()),
        );
        Self {
            root: Value::Mapping(entries),
        }
    }
}

impl Config {
    /// The document root as parsed.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The root mapping, if the document is one.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        self.root.as_mapping()
    }

    /// Look up a top-level string key. `None` when the root is not a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping()?.get(key)
    }

    /// The `version` entry, if present and a string.
    pub fn version(&self) -> Option<&str> {
        self.get("version").and_then(Value::as_str)
    }

    /// Short description of the root's YAML type, for logs.
    pub fn kind(&self) -> &'static str {
        match &self.root {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Tagged(_) => "tagged value",
        }
    }
}

impl From<Value> for Config {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_only_version() {
        let cfg = Config::default();
        assert_eq!(cfg.kind(), "mapping");
        assert_eq!(cfg.as_mapping().map(Mapping::len), Some(1));
        assert_eq!(cfg.version(), Some(DEFAULT_VERSION));
    }

    #[test]
    fn non_string_version_is_not_reported() {
        let mut entries = Mapping::new();
        entries.insert("version".into(), Value::from(3_i64));
        let cfg = Config::from(Value::Mapping(entries));

        assert_eq!(cfg.version(), None);
        assert!(cfg.get("version").is_some());
    }

    #[test]
    fn sequence_root_has_no_keys() {
        let cfg = Config::from(Value::Sequence(vec!["a".into(), "b".into()]));
        assert_eq!(cfg.kind(), "sequence");
        assert!(cfg.as_mapping().is_none());
        assert_eq!(cfg.get("version"), None);
        assert_eq!(cfg.root().as_sequence().map(Vec::len), Some(2));
    }
}
