//! Fuzzing target for matching and writing
//!
//! The first byte picks where to split the input into a path and a JSON
//! document. Every concrete path the matcher reports must resolve with `get`,
//! except through keys the dotted syntax cannot address.

#![no_main]

use flatql_core::{find_matches, get, set, Match, Segment};
use libfuzzer_sys::fuzz_target;
use serde_json::{json, Value};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let split_point = (data[0] as usize) % data.len();
    let (path_bytes, doc_bytes) = data[1..].split_at(split_point.min(data.len() - 1));

    let Ok(pattern) = std::str::from_utf8(path_bytes) else {
        return;
    };

    let mut docs = vec![
        json!(null),
        json!([]),
        json!({}),
        json!([1, null, 3]),
        json!({"a": {"b": [{"c": 1}, {"c": 2}]}}),
        json!([[[[[]]]]]),
    ];
    if let Ok(doc) = serde_json::from_slice::<Value>(doc_bytes) {
        docs.push(doc);
    }

    for doc in docs {
        if let Ok(matches) = find_matches(&doc, pattern) {
            for found in matches.into_iter().filter(addressable) {
                let path = found.path_string();
                assert_eq!(get(&doc, &path).ok().flatten(), Some(found.value));
            }
        }
        let _ = set(doc, pattern, json!("fuzz"));
    }
});

/// Whether every key on the match's path survives a round trip through text
fn addressable(found: &Match<'_>) -> bool {
    found.path.segments().iter().all(|segment| match segment {
        Segment::Field(name) => {
            !name.is_empty() && !name.contains(['.', '*']) && !name.starts_with('#')
        }
        _ => true,
    })
}
