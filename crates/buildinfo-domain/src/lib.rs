//! Buildinfo Domain Model
//!
//! Defines the wire-shaped records the build-information pipeline moves
//! between GitHub and the Octopus build-information store:
//! - `PushEvent` / `Commit`: the source-control push payload (read-only input)
//! - `BuildInformationCommand`: the submission unit sent to the store
//! - `PackageIdentity`: artifact id + version pairs attached to a build
//! - `OverwriteMode`: the store's policy for already-known builds
//! - `RunContext` / `InputParameters`: CI run context and step configuration
//!
//! Everything here is plain data. Commits are immutable once received; this
//! crate never talks to the network.

pub mod build_information;
pub mod config;
pub mod push;

pub use build_information::{
    BuildInformationCommand, BuildInformationCommit, OverwriteMode, PackageIdentity,
    ParseOverwriteModeError, BUILD_ENVIRONMENT, VCS_TYPE_GIT,
};
pub use config::{InputParameters, RunContext};
pub use push::{Commit, CommitUser, PushEvent};

/// Buildinfo domain version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
