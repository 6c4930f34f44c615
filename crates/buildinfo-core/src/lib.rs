//! Buildinfo Core - Commit filtering and build-information assembly
//!
//! Provides the two-stage pipeline behind the build-information push step:
//! - Filters a push event's commits down to the ones touching user-supplied
//!   path patterns, resolving changed paths per commit concurrently
//! - Assembles the filtered commits, package identities and run metadata
//!   into a single command and hands it to the store
//!
//! Collaborators (path resolution, the store, the report sink) are traits so
//! the filter and assembler are testable without live network calls.
//! In-memory fakes are provided via the `fakes` module.

pub mod error;
pub mod fakes;
pub mod filter;
pub mod matcher;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod store;
pub mod telemetry;

// Re-export key types
pub use error::{BuildInfoError, Result};
pub use filter::filter_commits;
pub use matcher::PathMatcher;
pub use pipeline::push_build_information;
pub use report::{Reporter, TracingReporter};
pub use resolver::{PathResolver, PayloadPathResolver, ResolveError, ResolveResult};
pub use store::{BuildInformationStore, StoreError};
pub use telemetry::init_tracing;
