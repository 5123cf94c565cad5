//! Fuzzing target for rule-driven transformation
//!
//! Input lines alternate between source patterns and destination templates.
//! Transformation may fail, but must never panic.

#![no_main]

use flatql_core::{extract, transform};
use libfuzzer_sys::fuzz_target;
use serde_json::json;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let lines: Vec<&str> = text.lines().collect();
    let rules: Vec<(String, String)> = lines
        .chunks(2)
        .filter_map(|pair| match pair {
            [source, destination] => Some((source.to_string(), destination.to_string())),
            _ => None,
        })
        .collect();

    let doc = json!({
        "count": 2,
        "entries": [
            {"name": "A", "authors": [{"id": 1}, {"id": 2}]},
            {"name": "B", "authors": [{"id": 4}]}
        ],
        "flags": {"x": true, "y": false}
    });

    let _ = transform(&doc, rules);
    let _ = extract(&doc, lines);
});
