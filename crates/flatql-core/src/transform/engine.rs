//! Transform engine
//!
//! Runs every rule's pattern against the input, turns each match into a
//! `(destination path, value)` pair, then rebuilds a fresh tree from those
//! pairs. During the rebuild `#i` segments are plain mapping keys; the final
//! pseudo-list pass turns them into sequences.
//!
//! Copyright (c) 2025 FlatQL Team
//! Licensed under the Apache-2.0 license

use super::config::TransformConfig;
use super::rule::{Destination, MapContext, MapFn, Rule};
use crate::matcher::find;
use crate::normalize::convert_pseudo_lists;
use crate::path::{Path, SEPARATOR};
use crate::rewrite::{identity_template, Template};
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::fmt;

/// A flattened `(destination path, value)` pair
pub type FlatEntry = (String, Value);

/// A rule with its source pattern parsed and its template compiled
#[derive(Debug, Clone)]
struct CompiledRule {
    source: Path,
    destination: CompiledDestination,
}

#[derive(Clone)]
enum CompiledDestination {
    Template(Template),
    Custom {
        func: MapFn,
        template: String,
        args: Vec<Value>,
    },
}

impl fmt::Debug for CompiledDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompiledDestination::Template(template) => f.debug_tuple("Template").field(template).finish(),
            CompiledDestination::Custom { template, args, .. } => f
                .debug_struct("Custom")
                .field("template", template)
                .field("args", args)
                .finish_non_exhaustive(),
        }
    }
}

/// A compiled, reusable rule set
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    rules: Vec<CompiledRule>,
}

impl Transformer {
    /// Create an empty transformer
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `rules`, keeping their order
    pub fn from_rules<I, R>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<Rule>,
    {
        let mut transformer = Self::new();
        for rule in rules {
            transformer.push(rule.into())?;
        }
        Ok(transformer)
    }

    /// Compile a declarative rule set
    pub fn from_config(config: &TransformConfig) -> Result<Self> {
        Self::from_rules(config.rules())
    }

    /// Transformer keeping only the locations matched by `patterns`
    pub fn extraction<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut transformer = Self::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let template = identity_template(Path::parse(pattern)?.len());
            transformer.push(Rule::new(pattern, template))?;
        }
        Ok(transformer)
    }

    /// Compile and append one rule
    pub fn push(&mut self, rule: Rule) -> Result<()> {
        let source = Path::parse(&rule.source)?;
        let destination = match rule.destination {
            Destination::Template(template) => CompiledDestination::Template(Template::parse(&template)),
            Destination::Custom { func, template, args } => CompiledDestination::Custom { func, template, args },
        };
        self.rules.push(CompiledRule { source, destination });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Transform `input` into a new tree
    pub fn apply(&self, input: &Value) -> Result<Value> {
        let entries = self.flatten(input)?;
        log::debug!(
            "Rebuilding tree from {} entries produced by {} rules",
            entries.len(),
            self.rules.len()
        );
        let rebuilt = rebuild(entries)?;
        Ok(convert_pseudo_lists(rebuilt))
    }

    /// All `(destination path, value)` pairs, in rule order then match order
    pub fn flatten(&self, input: &Value) -> Result<Vec<FlatEntry>> {
        let mut entries = Vec::new();

        for rule in &self.rules {
            let matches = find(input, &rule.source);
            log::trace!("Rule `{}` matched {} locations", rule.source, matches.len());

            for found in matches {
                let source_path = found.path_string();
                let entry = match &rule.destination {
                    CompiledDestination::Template(template) => {
                        (template.render(&source_path), found.value.clone())
                    }
                    CompiledDestination::Custom { func, template, args } => {
                        let context = MapContext {
                            source_path: &source_path,
                            template,
                            args,
                        };
                        func(found.value, &context)?
                    }
                };
                entries.push(entry);
            }
        }

        Ok(entries)
    }
}

/// Insert every entry into a fresh mapping, creating nested mappings for all
/// but the last segment of each destination path. Later entries overwrite
/// earlier ones at the same path.
fn rebuild(entries: Vec<FlatEntry>) -> Result<Value> {
    let mut root = Map::new();

    for (path, value) in entries {
        if path.is_empty() {
            return Err(Error::invalid_path("destination path must not be empty", path));
        }

        let mut parts = path.split(SEPARATOR).peekable();
        let mut level = &mut root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                level.insert(part.to_string(), value);
                break;
            }

            let slot = level
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            level = match slot {
                Value::Object(next) => next,
                _ => {
                    return Err(Error::PathConflict {
                        path: path.clone(),
                        segment: part.to_string(),
                    })
                }
            };
        }
    }

    Ok(Value::Object(root))
}

/// Reshape `input` according to `rules`
pub fn transform<I, R>(input: &Value, rules: I) -> Result<Value>
where
    I: IntoIterator<Item = R>,
    R: Into<Rule>,
{
    Transformer::from_rules(rules)?.apply(input)
}

/// Keep only the locations matched by `patterns`, in their original shape
pub fn extract<I, S>(input: &Value, patterns: I) -> Result<Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Transformer::extraction(patterns)?.apply(input)
}
