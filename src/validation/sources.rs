//! Property sources: enumerable sets of loaded configuration keys.
//!
//! A property source names every key present in one loaded configuration
//! document, flattened the way the configuration binder names them: mapping
//! keys joined with `.` (free-form keys like `jvm/gc/time` stay a single
//! segment) and sequence elements addressed as `[index]` with no separating
//! dot. The key validator walks these names against the schema model.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// An enumerable set of configuration keys from one source.
///
/// Ownership and synchronization of the underlying data belong to the
/// caller; the validator only reads the enumerated names.
pub trait PropertySource {
    /// Human-readable name of the source, used in warnings.
    fn name(&self) -> &str;

    /// All property keys present in the source, in document order.
    fn property_names(&self) -> Vec<String>;
}

/// A property source backed by a parsed YAML document.
///
/// # Examples
///
/// ```
/// use confpath::{PropertySource, YamlPropertySource};
///
/// let source = YamlPropertySource::from_str(
///     "demo",
///     "agent:\n  service-name: demo\n  tags:\n    env: prod\n",
/// )
/// .unwrap();
/// assert_eq!(
///     source.property_names(),
///     ["agent.service-name", "agent.tags.env"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct YamlPropertySource {
    name: String,
    keys: Vec<String>,
}

impl YamlPropertySource {
    /// Parses a YAML document into a property source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Yaml`](crate::Error::Yaml) if the document cannot
    /// be parsed.
    pub fn from_str(name: impl Into<String>, document: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(document)?;
        Ok(Self {
            name: name.into(),
            keys: flatten(&value),
        })
    }

    /// Reads and parses a YAML file into a property source.
    ///
    /// The source is named after the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read
    /// and [`Error::Yaml`](crate::Error::Yaml) if it cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let document = fs::read_to_string(path)?;
        let name = path.to_string_lossy().into_owned();
        Self::from_str(name, &document)
    }
}

impl PropertySource for YamlPropertySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn property_names(&self) -> Vec<String> {
        self.keys.clone()
    }
}

/// A property source backed by a parsed JSON document.
///
/// Keys are flattened with the same rules as [`YamlPropertySource`].
#[derive(Debug, Clone)]
pub struct JsonPropertySource {
    name: String,
    keys: Vec<String>,
}

impl JsonPropertySource {
    /// Parses a JSON document into a property source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the document cannot
    /// be parsed.
    pub fn from_str(name: impl Into<String>, document: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(document)?;
        // One flattener: JSON values embed losslessly into the YAML model.
        let value: serde_yaml::Value = serde_yaml::to_value(value)?;
        Ok(Self {
            name: name.into(),
            keys: flatten(&value),
        })
    }

    /// Reads and parses a JSON file into a property source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read
    /// and [`Error::Json`](crate::Error::Json) if it cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let document = fs::read_to_string(path)?;
        let name = path.to_string_lossy().into_owned();
        Self::from_str(name, &document)
    }
}

impl PropertySource for JsonPropertySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn property_names(&self) -> Vec<String> {
        self.keys.clone()
    }
}

/// Flattens a parsed document into binder-style property keys.
fn flatten(value: &serde_yaml::Value) -> Vec<String> {
    let mut keys = Vec::new();
    flatten_into(value, "", &mut keys);
    keys
}

fn flatten_into(value: &serde_yaml::Value, prefix: &str, keys: &mut Vec<String>) {
    use serde_yaml::Value;

    match value {
        Value::Mapping(map) if !map.is_empty() => {
            for (key, child) in map {
                let Some(segment) = key_text(key) else {
                    // Composite keys are not addressable as property paths.
                    continue;
                };
                let child_prefix = if prefix.is_empty() {
                    segment
                } else {
                    format!("{prefix}.{segment}")
                };
                flatten_into(child, &child_prefix, keys);
            }
        }
        Value::Sequence(seq) if !seq.is_empty() => {
            for (index, child) in seq.iter().enumerate() {
                flatten_into(child, &format!("{prefix}[{index}]"), keys);
            }
        }
        // Scalars, nulls, and empty containers emit the accumulated key.
        _ => {
            if !prefix.is_empty() {
                keys.push(prefix.to_string());
            }
        }
    }
}

fn key_text(key: &serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
