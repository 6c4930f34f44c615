//! PathResolver - the changed-paths lookup boundary
//!
//! The filter depends on this contract only; production wiring supplies a
//! remote-backed implementation, tests supply a fake with precomputed lists.

use async_trait::async_trait;
use buildinfo_domain::Commit;
use thiserror::Error;

/// Errors a changed-paths lookup can fail with
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The remote lookup failed with an HTTP-like status
    #[error("status {status}: {message}")]
    Transport { status: u16, message: String },

    /// Any other lookup failure
    #[error("{0}")]
    Other(String),
}

/// Result type for changed-paths lookups
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Resolves the set of file paths a commit touched.
///
/// Lookups for different commits are independent; callers may issue them
/// concurrently.
#[async_trait]
pub trait PathResolver: Send + Sync {
    /// Return every path the commit added, modified or removed.
    async fn touched_paths(&self, commit: &Commit) -> ResolveResult<Vec<String>>;
}

/// Resolver that reads the path lists already present on the push payload.
///
/// The push event carries added/modified/removed per commit, so no remote
/// call is needed when the payload is trusted (it is truncated on oversized
/// pushes, which is when a remote-backed resolver is the right choice).
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadPathResolver;

impl PayloadPathResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PathResolver for PayloadPathResolver {
    async fn touched_paths(&self, commit: &Commit) -> ResolveResult<Vec<String>> {
        Ok(commit.touched_paths())
    }
}
