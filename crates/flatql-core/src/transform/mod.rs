//! Rule-driven document reshaping
//!
//! A rule set maps source path patterns to destination templates. Every match
//! of every pattern becomes a `(destination path, value)` pair, and the pairs
//! are reassembled into a brand new tree.
//!
//! # Module Organization
//!
//! - [`rule`] - Rules, destinations and mapping function types
//! - [`engine`] - Matching, flattening and reconstruction
//! - [`builder`] - Fluent builder API for assembling transformers
//! - [`config`] - Declarative rule sets loaded from JSON
//!
//! # Examples
//!
//! ```
//! use flatql_core::transform;
//! use serde_json::json;
//!
//! let input = json!({"a": {"aa": [{"item": 1}, {"item": 2}]}});
//! let output = transform(&input, [("a.aa.*.item", "b.bb.{2}.element")]).unwrap();
//! assert_eq!(output, json!({"b": {"bb": [{"element": 1}, {"element": 2}]}}));
//! ```
//!
//! Mapping functions compute their own destination:
//!
//! ```
//! use flatql_core::TransformBuilder;
//! use serde_json::json;
//!
//! let transformer = TransformBuilder::new()
//!     .map("authors.*", "creator.{1}", |_, ctx| Ok((ctx.rewrite(), json!({"test": 1}))))
//!     .build()
//!     .unwrap();
//!
//! let input = json!({"authors": [{"id": 1}, {"id": 2}]});
//! assert_eq!(
//!     transformer.apply(&input).unwrap(),
//!     json!({"creator": [{"test": 1}, {"test": 1}]})
//! );
//! ```
//!
//! Copyright (c) 2025 FlatQL Team
//! Licensed under the Apache-2.0 license

pub mod builder;
pub mod config;
pub mod engine;
pub mod rule;


pub use builder::TransformBuilder;
pub use config::TransformConfig;
pub use engine::{extract, transform, FlatEntry, Transformer};
pub use rule::{Destination, MapContext, MapFn, Rule};
