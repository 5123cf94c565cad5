//! Pattern matching of paths against trees
//!
//! Resolves a path pattern, possibly containing wildcards, against a tree and
//! yields every matching location together with its concrete path. Branches
//! that cannot be followed (missing keys, out-of-range indexes, fields on a
//! sequence, anything below a scalar) are skipped silently.
//!
//! Copyright (c) 2025 FlatQL Team
//! Licensed under the Apache-2.0 license

use crate::path::{Path, Segment};
use crate::Result;
use serde_json::Value;

/// A location found by [`find`]
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    /// Concrete path: no wildcards, indexes resolved to non-negative positions
    pub path: Path,
    /// Value stored at `path`
    pub value: &'a Value,
}

impl<'a> Match<'a> {
    /// The concrete path in its dotted string form
    pub fn path_string(&self) -> String {
        self.path.to_string()
    }
}

/// Find every location in `tree` matching `pattern`.
///
/// Results are ordered depth-first, left to right. An exhausted pattern
/// always matches the current value, whatever it holds (including `null`).
pub fn find<'a>(tree: &'a Value, pattern: &Path) -> Vec<Match<'a>> {
    let mut matches = Vec::new();
    find_from(tree, pattern.segments(), Path::root(), &mut matches);
    matches
}

fn find_from<'a>(value: &'a Value, segments: &[Segment], current: Path, out: &mut Vec<Match<'a>>) {
    let Some((segment, rest)) = segments.split_first() else {
        out.push(Match { path: current, value });
        return;
    };

    match (value, segment) {
        (Value::Object(map), Segment::Field(key)) => {
            if let Some(child) = map.get(key) {
                find_from(child, rest, current.child(segment.clone()), out);
            }
        }
        (Value::Object(map), Segment::Wildcard) => {
            for (key, child) in map {
                find_from(child, rest, current.child(Segment::field(key.as_str())), out);
            }
        }
        (Value::Array(items), Segment::Wildcard) => {
            for (i, child) in items.iter().enumerate() {
                find_from(child, rest, current.child(index_segment(i)), out);
            }
        }
        (Value::Array(items), Segment::Index(index)) => {
            if let Some(i) = Segment::resolve_index(*index, items.len()) {
                find_from(&items[i], rest, current.child(index_segment(i)), out);
            }
        }
        _ => {}
    }
}

fn index_segment(position: usize) -> Segment {
    // Sequences never get anywhere near i64::MAX elements
    Segment::Index(position as i64)
}

/// Parse `pattern` and run [`find`]
pub fn find_matches<'a>(tree: &'a Value, pattern: &str) -> Result<Vec<Match<'a>>> {
    let pattern = Path::parse(pattern)?;
    Ok(find(tree, &pattern))
}

/// Values matching `pattern`, with falsy values (null, false, zero, empty
/// strings and empty containers) left out
pub fn find_paths<'a>(tree: &'a Value, pattern: &str) -> Result<Vec<&'a Value>> {
    Ok(find_matches(tree, pattern)?
        .into_iter()
        .map(|m| m.value)
        .filter(|value| is_truthy(value))
        .collect())
}

/// Values matching each pattern in turn, flattened in pattern order.
///
/// Unlike [`find_paths`] nothing is filtered out.
pub fn find_all_paths<'a, I, S>(tree: &'a Value, patterns: I) -> Result<Vec<&'a Value>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values = Vec::new();
    for pattern in patterns {
        values.extend(find_matches(tree, pattern.as_ref())?.into_iter().map(|m| m.value));
    }
    Ok(values)
}

/// Truthiness in the loose sense used by [`find_paths`]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
