//! Pseudo-list normalization
//!
//! The transform engine rebuilds trees with plain mappings only, so sequence
//! positions are first written as `#0`, `#1`, ... keys. This pass turns those
//! mappings back into sequences.
//!
//! Copyright (c) 2025 FlatQL Team
//! Licensed under the Apache-2.0 license

use crate::path::{is_index_marker, INDEX_PREFIX};
use serde_json::{Map, Value};

/// Convert every pseudo-list mapping in `value` into a sequence.
///
/// Only the *first* key of a mapping decides how it is read. When it is an
/// index marker, the mapping becomes a sequence with one slot per key, slot
/// `i` taken from key `#i`; a missing `#i` leaves `null` in that slot. An empty
/// mapping becomes `null`. Sequences and scalars are returned untouched.
pub fn convert_pseudo_lists(value: Value) -> Value {
    match value {
        Value::Object(map) => convert_map(map),
        other => other,
    }
}

fn convert_map(mut map: Map<String, Value>) -> Value {
    let first_is_index = match map.keys().next() {
        Some(key) => is_index_marker(key),
        None => return Value::Null,
    };

    if first_is_index {
        let len = map.len();
        let items = (0..len)
            .map(|i| {
                map.remove(&format!("{}{}", INDEX_PREFIX, i))
                    .map(convert_pseudo_lists)
                    .unwrap_or(Value::Null)
            })
            .collect();
        Value::Array(items)
    } else {
        Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, convert_pseudo_lists(value)))
                .collect(),
        )
    }
}
