//! Transform rules and destination resolution
//!
//! Copyright (c) 2025 FlatQL Team
//! Licensed under the Apache-2.0 license

use crate::rewrite::rewrite_path;
use crate::Result;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A user mapping function.
///
/// Receives the matched value and the match context and returns the
/// destination path together with the value to store there. The function is
/// in charge of computing the destination path; [`MapContext::rewrite`] does
/// the usual template substitution.
pub type MapFn = Arc<dyn Fn(&Value, &MapContext<'_>) -> Result<(String, Value)> + Send + Sync>;

/// What a mapping function knows about the current match
#[derive(Debug, Clone, Copy)]
pub struct MapContext<'a> {
    /// Concrete path of the match in the source tree
    pub source_path: &'a str,
    /// Destination template the rule was declared with
    pub template: &'a str,
    /// Extra arguments the rule was declared with
    pub args: &'a [Value],
}

impl<'a> MapContext<'a> {
    /// The destination path obtained by rewriting `template` for this match
    pub fn rewrite(&self) -> String {
        rewrite_path(self.source_path, self.template)
    }

    /// Extra argument at `position`, if present
    pub fn arg(&self, position: usize) -> Option<&'a Value> {
        self.args.get(position)
    }
}

/// Where the values matched by a rule go
#[derive(Clone)]
pub enum Destination {
    /// Template rewritten against each matched path
    Template(String),
    /// Mapping function computing path and value per match
    Custom {
        func: MapFn,
        template: String,
        args: Vec<Value>,
    },
}

impl Destination {
    pub fn template(template: impl Into<String>) -> Self {
        Destination::Template(template.into())
    }

    pub fn custom<F>(template: impl Into<String>, args: Vec<Value>, func: F) -> Self
    where
        F: Fn(&Value, &MapContext<'_>) -> Result<(String, Value)> + Send + Sync + 'static,
    {
        Destination::Custom {
            func: Arc::new(func),
            template: template.into(),
            args,
        }
    }

    /// The destination template, whichever the variant
    pub fn template_str(&self) -> &str {
        match self {
            Destination::Template(template) => template,
            Destination::Custom { template, .. } => template,
        }
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Destination::Custom { template, args, .. } => f
                .debug_struct("Custom")
                .field("template", template)
                .field("args", args)
                .finish_non_exhaustive(),
        }
    }
}

impl From<&str> for Destination {
    fn from(template: &str) -> Self {
        Destination::template(template)
    }
}

impl From<String> for Destination {
    fn from(template: String) -> Self {
        Destination::Template(template)
    }
}

/// One source pattern to destination entry of a rule set
#[derive(Debug, Clone)]
pub struct Rule {
    pub source: String,
    pub destination: Destination,
}

impl Rule {
    pub fn new(source: impl Into<String>, destination: impl Into<Destination>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

impl<S, D> From<(S, D)> for Rule
where
    S: Into<String>,
    D: Into<Destination>,
{
    fn from((source, destination): (S, D)) -> Self {
        Rule::new(source, destination)
    }
}
