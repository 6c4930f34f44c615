//! Buildinfo GitHub - Actions context and commits-API adapters
//!
//! Thin adapters between the hosting GitHub Actions run and the core
//! pipeline:
//! - `context`: builds the `RunContext` from `GITHUB_*` environment
//!   variables and reads the push-event payload from disk
//! - `commits`: a reqwest-backed `PathResolver` over the GitHub commits API
//!
//! No algorithmic content lives here; everything interesting stays in
//! `buildinfo-core`.

pub mod commits;
pub mod context;
pub mod error;

pub use commits::{CommitsClient, CommitsConfig};
pub use context::{push_event_from_env, read_push_event, run_context_from_env};
pub use error::GitHubError;
