//! Declarative rule sets
//!
//! A rule set is written as a plain JSON object mapping source patterns to
//! destination templates, in the order the rules should run:
//!
//! ```json
//! {
//!     "res_uuid": "id",
//!     "list.*.id": "list.{1}",
//!     "res_name": "name"
//! }
//! ```
//!
//! Mapping functions cannot be expressed this way; add them to a
//! [`TransformBuilder`](super::TransformBuilder) after loading.
//!
//! Copyright (c) 2025 FlatQL Team
//! Licensed under the Apache-2.0 license

use super::rule::Rule;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path as FsPath;

/// Ordered source pattern to destination template pairs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct TransformConfig {
    rules: Vec<(String, String)>,
}

impl TransformConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule, keeping declaration order
    pub fn with_rule(mut self, source: impl Into<String>, destination: impl Into<String>) -> Self {
        self.rules.push((source.into(), destination.into()));
        self
    }

    /// Parse a JSON object of rules
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Read rules from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::try_from(map),
            other => Err(Error::configuration(format!(
                "rule set must be a JSON object, found {}",
                type_name(&other)
            ))),
        }
    }

    /// Load a rule set from a JSON file
    pub fn from_file(path: impl AsRef<FsPath>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        log::debug!("Loaded transform rules from {}", path.display());
        Self::from_json_str(&contents)
    }

    /// The rules as [`Rule`]s, in declaration order
    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.rules
            .iter()
            .map(|(source, destination)| Rule::new(source.as_str(), destination.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl TryFrom<Map<String, Value>> for TransformConfig {
    type Error = Error;

    fn try_from(map: Map<String, Value>) -> Result<Self> {
        let rules = map
            .into_iter()
            .map(|(source, destination)| match destination {
                Value::String(template) => Ok((source, template)),
                other => Err(Error::configuration(format!(
                    "destination for `{}` must be a string template, found {}",
                    source,
                    type_name(&other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }
}

impl From<TransformConfig> for Map<String, Value> {
    fn from(config: TransformConfig) -> Self {
        config
            .rules
            .into_iter()
            .map(|(source, destination)| (source, Value::String(destination)))
            .collect()
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_from_json_str_keeps_order() {
        let config = TransformConfig::from_json_str(
            r#"{"res_uuid": "id", "list.*.id": "list.{1}", "res_name": "name"}"#,
        )
        .unwrap();
        let sources: Vec<_> = config.rules().map(|r| r.source).collect();
        assert_eq!(sources, vec!["res_uuid", "list.*.id", "res_name"]);
    }

    #[test]
    fn test_non_string_destination_is_rejected() {
        let err = TransformConfig::from_value(json!({"a": 1})).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("`a`"));
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = TransformConfig::from_value(json!(["a", "b"])).unwrap_err();
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_invalid_json() {
        let err = TransformConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = TransformConfig::new().with_rule("a", "b").with_rule("c.*", "d.{1}");
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(text, r#"{"a":"b","c.*":"d.{1}"}"#);
        let back: TransformConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"a.aa": "b.bb"}}"#).unwrap();
        let config = TransformConfig::from_file(file.path()).unwrap();
        assert_eq!(config.len(), 1);

        let err = TransformConfig::from_file(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
