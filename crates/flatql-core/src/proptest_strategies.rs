//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random trees,
//! field-only paths and pseudo-list mappings for property testing.

#![cfg(test)]

use proptest::collection::{hash_map, vec};
use proptest::prelude::*;
use crate::path::{Path, Segment};
use serde_json::{Map, Value};

/// Strategy for mapping keys that are plain fields
pub fn field_name_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}"
}

/// Strategy for scalar leaves
pub fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
    ]
}

/// Strategy for trees with controlled depth, mixing mappings and sequences
pub fn tree_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(
        4,  // max depth
        32, // max size
        5,  // items per collection
        |inner| {
            prop_oneof![
                vec(inner.clone(), 0..5).prop_map(Value::Array),
                hash_map(field_name_strategy(), inner, 0..5)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        },
    )
}

/// Strategy for dotted paths made of field segments only
pub fn field_path_strategy() -> impl Strategy<Value = String> {
    vec(field_name_strategy(), 1..5).prop_map(|parts| parts.join("."))
}

/// Strategy for sequences of non-null leaves
pub fn leaf_list_strategy() -> impl Strategy<Value = Vec<Value>> {
    vec(
        prop_oneof![
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[a-z]{1,10}".prop_map(Value::String),
        ],
        1..8,
    )
}

/// Build the pseudo-list mapping for `items`, with keys in reverse order
pub fn reversed_pseudo_list(items: &[Value]) -> Value {
    let map: Map<String, Value> = items
        .iter()
        .enumerate()
        .rev()
        .map(|(i, item)| (format!("#{}", i), item.clone()))
        .collect();
    Value::Object(map)
}

/// Strategy for container-rooted trees whose containers are never empty
pub fn non_empty_tree_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy()
        .prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                vec(inner.clone(), 1..4).prop_map(Value::Array),
                hash_map(field_name_strategy(), inner, 1..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
        .prop_filter("root must be a container", |tree| tree.is_array() || tree.is_object())
}

/// Concrete paths of every leaf of `tree`, in traversal order
pub fn leaf_paths(tree: &Value) -> Vec<String> {
    fn walk(value: &Value, path: Path, out: &mut Vec<String>) {
        match value {
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    walk(item, path.child(Segment::Index(i as i64)), out);
                }
            }
            Value::Object(map) => {
                for (key, item) in map {
                    walk(item, path.child(Segment::field(key.clone())), out);
                }
            }
            _ => out.push(path.to_string()),
        }
    }

    let mut out = Vec::new();
    walk(tree, Path::root(), &mut out);
    out
}
