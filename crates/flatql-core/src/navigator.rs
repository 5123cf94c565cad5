//! Single-location reads and writes
//!
//! Copyright (c) 2025 FlatQL Team
//! Licensed under the Apache-2.0 license

use crate::matcher::{find, is_truthy};
use crate::path::{Path, Segment};
use crate::{Error, Result};
use serde_json::{Map, Value};

/// Value at `path`, or `None` when nothing is there.
///
/// Paths containing `*` anywhere are rejected with [`Error::UnsupportedPattern`].
pub fn get<'a>(tree: &'a Value, path: &str) -> Result<Option<&'a Value>> {
    let path = Path::parse(path)?;
    path.require_concrete()?;

    let mut matches = find(tree, &path);
    if matches.len() == 1 {
        Ok(matches.pop().map(|m| m.value))
    } else {
        Ok(None)
    }
}

/// Like [`get`], but returns an owned copy or `default`
pub fn get_or(tree: &Value, path: &str, default: Value) -> Result<Value> {
    Ok(get(tree, path)?.cloned().unwrap_or(default))
}

/// Write `value` at `path`, creating containers on the way, and return the
/// new root.
///
/// Any falsy value (`null`, `false`, `0`, `""` or an empty container) on the
/// way is replaced by a fresh sequence when the next segment is an index,
/// otherwise by a fresh mapping. Writing to a sequence position that is out
/// of range or holds a falsy value *inserts* at that position (clamped to the
/// sequence length) instead of padding, so sequences should be filled in
/// ascending order. Truthy scalars in the way are left untouched.
pub fn set(tree: Value, path: &str, value: Value) -> Result<Value> {
    let parsed = Path::parse(path)?;
    parsed.require_concrete()?;
    write(tree, parsed.segments(), value, path)
}

fn write(current: Value, segments: &[Segment], value: Value, path: &str) -> Result<Value> {
    let Some((segment, rest)) = segments.split_first() else {
        return Ok(value);
    };

    let current = if is_vacant(&current) {
        match segment {
            Segment::Index(_) => Value::Array(Vec::new()),
            _ => Value::Object(Map::new()),
        }
    } else {
        current
    };

    match (current, segment) {
        (Value::Array(mut items), Segment::Index(index)) => {
            match Segment::resolve_index(*index, items.len()) {
                Some(i) if is_truthy(&items[i]) => {
                    let existing = items[i].take();
                    items[i] = write(existing, rest, value, path)?;
                }
                _ => {
                    let position = insert_position(*index, items.len());
                    items.insert(position, write(Value::Null, rest, value, path)?);
                }
            }
            Ok(Value::Array(items))
        }
        (Value::Array(_), other) => Err(Error::invalid_index(other.to_string(), path)),
        (Value::Object(mut map), segment) => {
            let key = segment.to_string();
            let existing = map.get_mut(&key).map(Value::take).unwrap_or(Value::Null);
            let updated = write(existing, rest, value, path)?;
            map.insert(key, updated);
            Ok(Value::Object(map))
        }
        (scalar, _) => {
            log::debug!("Skipping write to `{}`: a scalar is in the way", path);
            Ok(scalar)
        }
    }
}

fn is_vacant(value: &Value) -> bool {
    !is_truthy(value)
}

fn insert_position(index: i64, len: usize) -> usize {
    let resolved = if index < 0 {
        (len as i64).saturating_add(index)
    } else {
        index
    };
    usize::try_from(resolved.max(0)).unwrap_or(0).min(len)
}
