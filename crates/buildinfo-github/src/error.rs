//! Error types for the GitHub adapters

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the Actions context
#[derive(Error, Debug)]
pub enum GitHubError {
    /// A required `GITHUB_*` variable is absent
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    /// A `GITHUB_*` variable holds an unusable value
    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidVar { name: &'static str, value: String },

    /// `GITHUB_REPOSITORY` is not of the form `owner/repo`
    #[error("invalid repository {0:?}, expected owner/repo")]
    InvalidRepository(String),

    /// The event payload file could not be read
    #[error("failed to read event payload {path}: {source}")]
    EventRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The event payload is not valid JSON for a push event
    #[error("failed to parse event payload: {0}")]
    EventParse(#[from] serde_json::Error),
}
