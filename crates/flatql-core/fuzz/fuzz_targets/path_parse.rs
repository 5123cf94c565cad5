//! Fuzzing target for path parsing and template rewriting
//!
//! Arbitrary input must either parse or return an error, and rewriting with
//! any template must never panic.

#![no_main]

use flatql_core::{rewrite_path, Path};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    if let Ok(path) = Path::parse(&input) {
        // Display must round-trip through the parser
        let rendered = path.to_string();
        assert_eq!(Path::parse(&rendered).ok(), Some(path));
    }

    let (source, template) = input.split_at(input.len() / 2);
    let _ = rewrite_path(source, template);
});
