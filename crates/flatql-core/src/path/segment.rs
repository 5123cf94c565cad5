//! Path segment classification
//!
//! Copyright (c) 2025 FlatQL Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result};
use std::fmt;

/// Separator between path segments
pub const SEPARATOR: char = '.';

/// Prefix marking a positional (index) segment, e.g. `#0` or `#-1`
pub const INDEX_PREFIX: char = '#';

/// Token matching every child at one level
pub const WILDCARD: &str = "*";

/// A single step of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Mapping key
    Field(String),
    /// Sequence position, negative values count from the end
    Index(i64),
    /// Every element of a sequence or every key of a mapping
    Wildcard,
}

impl Segment {
    /// Classify one raw segment by its prefix.
    ///
    /// `path` is only used for error reporting.
    pub fn classify(raw: &str, path: &str) -> Result<Self> {
        if raw == WILDCARD {
            return Ok(Segment::Wildcard);
        }

        match raw.strip_prefix(INDEX_PREFIX) {
            Some(position) => position
                .parse::<i64>()
                .map(Segment::Index)
                .map_err(|e| Error::InvalidIndex {
                    segment: raw.to_string(),
                    path: path.to_string(),
                    source: Some(e),
                }),
            None => Ok(Segment::Field(raw.to_string())),
        }
    }

    pub fn field(name: impl Into<String>) -> Self {
        Segment::Field(name.into())
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }

    /// Resolve an index against a sequence length, Python-slice style.
    ///
    /// Returns `None` when the position falls outside `0..len`.
    pub fn resolve_index(index: i64, len: usize) -> Option<usize> {
        let len = i64::try_from(len).ok()?;
        let resolved = if index < 0 { len + index } else { index };
        if (0..len).contains(&resolved) {
            usize::try_from(resolved).ok()
        } else {
            None
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => write!(f, "{}", name),
            Segment::Index(index) => write!(f, "{}{}", INDEX_PREFIX, index),
            Segment::Wildcard => write!(f, "{}", WILDCARD),
        }
    }
}

/// Whether a raw segment string is an index marker (`#...`)
pub fn is_index_marker(raw: &str) -> bool {
    raw.starts_with(INDEX_PREFIX)
}
