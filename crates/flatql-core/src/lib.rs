//! FlatQL Core - path-addressable access and reshaping of nested data
//!
//! This crate works on `serde_json::Value` trees (mappings keep insertion
//! order) addressed by dotted paths such as `entries.#0.authors.*.id`.
//!
//! # Main Components
//!
//! - **Path Model**: `field`, `#index` (negative counts from the end) and `*`
//!   segments joined by `.`
//! - **Navigator**: [`get`] and [`set`] for single concrete locations
//! - **Matcher**: [`find`] and friends expand wildcards into concrete matches
//! - **Rewriter**: [`rewrite_path`] turns a matched path into a destination
//!   path using `{n}` placeholders
//! - **Transform Engine**: [`transform`] and [`extract`] rebuild whole
//!   documents from source pattern to destination template rules
//!
//! The library is deliberately permissive: missing keys, out-of-range
//! indexes and type mismatches while reading produce empty results rather
//! than errors.
//!
//! # Example
//!
//! ```
//! use flatql_core::{get, set, transform, Result};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let doc = set(json!({}), "user.tags.#0", json!("admin"))?;
//!     assert_eq!(get(&doc, "user.tags.#-1")?, Some(&json!("admin")));
//!
//!     let reshaped = transform(&doc, [("user.tags.*", "roles.{2}")])?;
//!     assert_eq!(reshaped, json!({"roles": ["admin"]}));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod matcher;
pub mod navigator;
pub mod normalize;
pub mod path;
pub mod rewrite;
pub mod transform;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use matcher::{find, find_all_paths, find_matches, find_paths, is_truthy, Match};
pub use navigator::{get, get_or, set};
pub use normalize::convert_pseudo_lists;
pub use path::{Path, Segment};
pub use rewrite::{rewrite_path, Template};
pub use transform::{
    extract, transform, Destination, MapContext, MapFn, Rule, TransformBuilder, TransformConfig,
    Transformer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
