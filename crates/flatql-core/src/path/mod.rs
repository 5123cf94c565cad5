//! Dotted path model
//!
//! A path is a `.` separated list of segments. Each segment is a mapping key
//! (`name`), a sequence position (`#0`, `#-1`) or a wildcard (`*`). There is
//! no escaping, so keys that contain `.` cannot be addressed. The empty string
//! is the root path.
//!
//! Copyright (c) 2025 FlatQL Team
//! Licensed under the Apache-2.0 license

pub mod segment;

pub use segment::{is_index_marker, Segment, INDEX_PREFIX, SEPARATOR, WILDCARD};

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A parsed path or path pattern
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Parse a dotted path string
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Ok(Self::root());
        }

        let segments = path
            .split(SEPARATOR)
            .map(|raw| Segment::classify(raw, path))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments })
    }

    /// The empty path, addressing the whole tree
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_wildcards(&self) -> bool {
        self.segments.iter().any(Segment::is_wildcard)
    }

    /// A new path with `segment` appended
    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    /// Fail with [`Error::UnsupportedPattern`] when any segment contains `*`,
    /// whether as a wildcard or inside a key such as `a*`
    pub fn require_concrete(&self) -> Result<()> {
        let starred_key = self
            .segments
            .iter()
            .any(|segment| matches!(segment, Segment::Field(name) if name.contains(WILDCARD)));
        if self.has_wildcards() || starred_key {
            return Err(Error::unsupported_pattern(self.to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
