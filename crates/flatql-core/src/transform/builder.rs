//! Builder for assembling transformers
//!
//! This module provides a fluent builder API for putting together rule sets
//! that mix plain templates, mapping functions and loaded configuration.
//!
//! Copyright (c) 2025 FlatQL Team
//! Licensed under the Apache-2.0 license

use super::config::TransformConfig;
use super::engine::Transformer;
use super::rule::{Destination, MapContext, Rule};
use crate::Result;
use serde_json::Value;

/// Builder for creating a [`Transformer`]
#[derive(Debug, Default)]
pub struct TransformBuilder {
    rules: Vec<Rule>,
}

impl TransformBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a declarative rule set
    pub fn from_config(config: &TransformConfig) -> Self {
        Self {
            rules: config.rules().collect(),
        }
    }

    /// Map matches of `source` to the path produced by `template`
    pub fn rule(mut self, source: impl Into<String>, template: impl Into<String>) -> Self {
        self.rules.push(Rule::new(source, Destination::Template(template.into())));
        self
    }

    /// Map matches of `source` through `func`
    pub fn map<F>(self, source: impl Into<String>, template: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value, &MapContext<'_>) -> Result<(String, Value)> + Send + Sync + 'static,
    {
        self.map_with_args(source, template, Vec::new(), func)
    }

    /// Map matches of `source` through `func`, handing it extra arguments
    pub fn map_with_args<F>(
        mut self,
        source: impl Into<String>,
        template: impl Into<String>,
        args: Vec<Value>,
        func: F,
    ) -> Self
    where
        F: Fn(&Value, &MapContext<'_>) -> Result<(String, Value)> + Send + Sync + 'static,
    {
        self.rules
            .push(Rule::new(source, Destination::custom(template, args, func)));
        self
    }

    /// Append a prepared rule
    pub fn add_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Compile the collected rules
    pub fn build(self) -> Result<Transformer> {
        Transformer::from_rules(self.rules)
    }
}
