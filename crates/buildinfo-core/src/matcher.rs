//! Path pattern matching.
//!
//! Compiles a set of glob patterns once and matches forward-slash commit
//! paths against them. `require_literal_separator` keeps `*` inside a single
//! path component while `**` crosses components, and a pattern without
//! wildcards only matches the identical path.

use crate::error::{BuildInfoError, Result};
use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled set of path patterns.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    patterns: Vec<Pattern>,
}

impl PathMatcher {
    /// Compile every pattern in the set.
    ///
    /// Fails with [`BuildInfoError::InvalidPattern`] naming the first
    /// malformed pattern.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| BuildInfoError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(PathMatcher { patterns })
    }

    /// Whether the set contains no patterns. An empty matcher matches
    /// nothing; callers treat an empty pattern *set* as "no filter" before
    /// constructing a matcher.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether any pattern in the set matches the path.
    pub fn matches(&self, path: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_with(path, MATCH_OPTIONS))
    }
}
