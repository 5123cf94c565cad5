//! Destination path rewriting
//!
//! A destination template is a dotted path that may refer back to the matched
//! source path in two ways:
//!
//! - `{n}` anywhere in the text is replaced by segment `n` (0-based) of the
//!   source path, so `rewrite_path("a.b.c", "{2}.{0}")` gives `"c.a"`;
//! - every `*` in the template, whole segment or not, takes the next index
//!   segment (`#i`) of the source path, the k-th `*` pairing with the k-th
//!   index, so `rewrite_path("a.#3", "b.x*")` gives `"b.x#3"`.
//!
//! Placeholders that cannot be resolved are left as they are.
//!
//! Copyright (c) 2025 FlatQL Team
//! Licensed under the Apache-2.0 license

use crate::path::{is_index_marker, SEPARATOR, WILDCARD};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("valid regex"));

/// A destination template, split once and rendered per match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    parts: Vec<TemplatePart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TemplatePart {
    text: String,
    /// Number of `*` characters, each filled from the source's index segments
    wildcards: usize,
    /// Whether the text holds at least one `{n}` placeholder
    positional: bool,
}

impl Template {
    pub fn parse(template: &str) -> Self {
        let parts = template
            .split(SEPARATOR)
            .map(|part| TemplatePart {
                text: part.to_string(),
                wildcards: part.matches(WILDCARD).count(),
                positional: PLACEHOLDER_RE.is_match(part),
            })
            .collect();

        Self {
            raw: template.to_string(),
            parts,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the template refers to the source path at all
    pub fn has_placeholders(&self) -> bool {
        self.parts
            .iter()
            .any(|part| part.wildcards > 0 || part.positional)
    }

    /// Render the template for one concrete source path
    pub fn render(&self, source_path: &str) -> String {
        let source: Vec<&str> = source_path.split(SEPARATOR).collect();
        let mut indexes = source.iter().copied().filter(|s| is_index_marker(s));

        let rendered: Vec<Cow<'_, str>> = self
            .parts
            .iter()
            .map(|part| {
                let mut text = Cow::Borrowed(part.text.as_str());
                if part.wildcards > 0 {
                    text = Cow::Owned(fill_wildcards(&part.text, &mut indexes));
                }
                if part.positional {
                    text = Cow::Owned(substitute_positions(&text, &source).into_owned());
                }
                text
            })
            .collect();

        rendered.join(&SEPARATOR.to_string())
    }
}

/// Replace each `*` in `text` with the next index; surplus stars stay
fn fill_wildcards<'a>(text: &str, indexes: &mut impl Iterator<Item = &'a str>) -> String {
    let mut filled = String::with_capacity(text.len());
    for (i, piece) in text.split(WILDCARD).enumerate() {
        if i > 0 {
            filled.push_str(indexes.next().unwrap_or(WILDCARD));
        }
        filled.push_str(piece);
    }
    filled
}

fn substitute_positions<'a>(text: &'a str, source: &[&str]) -> Cow<'a, str> {
    PLACEHOLDER_RE.replace_all(text, |caps: &Captures<'_>| {
        caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|n| source.get(n))
            .map(|segment| segment.to_string())
            .unwrap_or_else(|| caps[0].to_string())
    })
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<&str> for Template {
    fn from(template: &str) -> Self {
        Self::parse(template)
    }
}

/// Rewrite a concrete source path into a destination path using `template`
pub fn rewrite_path(source_path: &str, template: &str) -> String {
    Template::parse(template).render(source_path)
}

/// Template that reproduces any path matched by a pattern of `len` segments
pub(crate) fn identity_template(len: usize) -> String {
    (0..len)
        .map(|i| format!("{{{}}}", i))
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}
