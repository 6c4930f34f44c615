//! CI run context and step configuration.
//!
//! `RunContext` is built once at the entry point from the hosting CI's
//! environment and threaded through function arguments; nothing downstream
//! reads ambient state.

use crate::build_information::OverwriteMode;
use serde::{Deserialize, Serialize};

/// Identity of the CI run this step executes in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunContext {
    /// Server hosting the repository (e.g. `https://github.com`).
    pub server_url: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Fully-qualified ref under evaluation (e.g. `refs/heads/main`).
    pub ref_name: String,
    /// Commit SHA the run checked out.
    pub sha: String,
    /// Unique id of the run, used in the build URL.
    pub run_id: u64,
    /// Ordinal run number, used as the build number.
    pub run_number: u64,
}

impl RunContext {
    /// Repository URI, `{server_url}/{owner}/{repo}`.
    pub fn repository_uri(&self) -> String {
        format!("{}/{}/{}", self.server_url, self.owner, self.repo)
    }

    /// Link to this run, `{repository_uri}/actions/runs/{run_id}`.
    pub fn build_url(&self) -> String {
        format!("{}/actions/runs/{}", self.repository_uri(), self.run_id)
    }
}

/// Step configuration, parsed outside the core (CLI flags or environment).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputParameters {
    /// Branch name override; when absent the branch is derived from the ref.
    pub branch: Option<String>,
    /// Target space in the build-information store.
    pub space: String,
    /// Package ids to associate with this build.
    pub packages: Vec<String>,
    /// Version shared by all packages.
    pub version: String,
    /// Glob patterns selecting relevant commits; empty means no filter.
    pub paths: Vec<String>,
    /// Store policy for already-known builds.
    pub overwrite_mode: OverwriteMode,
    /// Emit the serialized command and matched commit ids before submitting.
    pub debug: bool,
}

impl InputParameters {
    /// Whether a commit filter was requested.
    pub fn has_path_filter(&self) -> bool {
        !self.paths.is_empty()
    }
}
