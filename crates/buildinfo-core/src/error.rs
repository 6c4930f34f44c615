//! Error types for the build-information pipeline

use crate::resolver::ResolveError;
use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur while filtering commits or pushing build information
#[derive(Error, Debug)]
pub enum BuildInfoError {
    /// A supplied path pattern is not valid glob syntax
    #[error("invalid path pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// A per-commit changed-path lookup failed
    #[error("commit lookup error: {0}")]
    Resolve(#[from] ResolveError),

    /// The build-information store rejected or failed the submission
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Required run context is absent
    #[error("missing required run context: {0}")]
    MissingContext(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for build-information pipeline operations
pub type Result<T> = std::result::Result<T, BuildInfoError>;
