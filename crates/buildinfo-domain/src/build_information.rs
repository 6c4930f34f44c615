//! Build-information command types.
//!
//! The Octopus build-information API takes PascalCase field names on the
//! command body (`spaceName` is the one camelCase holdout), so the serde
//! renames here are part of the wire contract, not a style choice.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Build environment label attached to every submitted command.
pub const BUILD_ENVIRONMENT: &str = "GitHub Actions";

/// VCS type label attached to every submitted command.
pub const VCS_TYPE_GIT: &str = "Git";

/// Minimal commit record carried in a build-information command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildInformationCommit {
    /// Commit SHA.
    pub id: String,
    /// Commit message.
    pub comment: String,
}

/// One artifact associated with a build: package id plus version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageIdentity {
    /// Package id as known to the store.
    pub id: String,
    /// Version string shared by all packages in one submission.
    pub version: String,
}

/// Store policy for build information that already exists for a
/// package/version pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverwriteMode {
    /// Reject the submission if build information already exists.
    #[default]
    FailIfExists,
    /// Replace any existing build information.
    OverwriteExisting,
    /// Keep the existing build information and report success.
    IgnoreIfExists,
}

impl OverwriteMode {
    /// The query-parameter value the store expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverwriteMode::FailIfExists => "FailIfExists",
            OverwriteMode::OverwriteExisting => "OverwriteExisting",
            OverwriteMode::IgnoreIfExists => "IgnoreIfExists",
        }
    }
}

impl fmt::Display for OverwriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unrecognised overwrite mode.
#[derive(Debug, Error)]
#[error("invalid overwrite mode: {0} (expected FailIfExists, OverwriteExisting or IgnoreIfExists)")]
pub struct ParseOverwriteModeError(pub String);

impl FromStr for OverwriteMode {
    type Err = ParseOverwriteModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "failifexists" => Ok(OverwriteMode::FailIfExists),
            "overwriteexisting" => Ok(OverwriteMode::OverwriteExisting),
            "ignoreifexists" => Ok(OverwriteMode::IgnoreIfExists),
            _ => Err(ParseOverwriteModeError(s.to_string())),
        }
    }
}

/// The unit submitted to the build-information store.
///
/// Submission is all-or-nothing: either the whole command is accepted for
/// every package it names, or nothing is recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildInformationCommand {
    /// Target space in the store.
    #[serde(rename = "spaceName")]
    pub space_name: String,
    /// Build environment label (see [`BUILD_ENVIRONMENT`]).
    pub build_environment: String,
    /// CI run number, stringly typed per the store contract.
    pub build_number: String,
    /// Link back to the CI run.
    pub build_url: String,
    /// Branch the build ran against.
    pub branch: String,
    /// VCS type label (see [`VCS_TYPE_GIT`]).
    pub vcs_type: String,
    /// Repository URI.
    pub vcs_root: String,
    /// Commit SHA the run checked out.
    pub vcs_commit_number: String,
    /// Commits relevant to this build, in push order.
    pub commits: Vec<BuildInformationCommit>,
    /// Artifacts associated with this build.
    pub packages: Vec<PackageIdentity>,
}
