//! Actions run context from the environment.
//!
//! GitHub Actions describes the current run through `GITHUB_*` variables
//! and writes the triggering event payload to `GITHUB_EVENT_PATH`. Both are
//! read exactly once at the entry point; the resulting structs are threaded
//! through arguments from there.

use std::path::Path;

use buildinfo_domain::{PushEvent, RunContext};
use tracing::debug;

use crate::error::GitHubError;

const DEFAULT_SERVER_URL: &str = "https://github.com";

fn require_var(name: &'static str) -> Result<String, GitHubError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(GitHubError::MissingVar(name)),
    }
}

fn require_u64_var(name: &'static str) -> Result<u64, GitHubError> {
    let value = require_var(name)?;
    value
        .parse()
        .map_err(|_| GitHubError::InvalidVar { name, value })
}

/// Split `owner/repo` into its two halves.
pub fn split_repository(repository: &str) -> Result<(String, String), GitHubError> {
    match repository.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(GitHubError::InvalidRepository(repository.to_string())),
    }
}

/// Build the run context from the standard `GITHUB_*` variables.
///
/// A missing or malformed variable is a fatal precondition failure; nothing
/// remote has been called at this point.
pub fn run_context_from_env() -> Result<RunContext, GitHubError> {
    let server_url =
        std::env::var("GITHUB_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
    let repository = require_var("GITHUB_REPOSITORY")?;
    let (owner, repo) = split_repository(&repository)?;

    Ok(RunContext {
        server_url,
        owner,
        repo,
        ref_name: require_var("GITHUB_REF")?,
        sha: require_var("GITHUB_SHA")?,
        run_id: require_u64_var("GITHUB_RUN_ID")?,
        run_number: require_u64_var("GITHUB_RUN_NUMBER")?,
    })
}

/// Parse a push-event payload from disk.
///
/// Payloads from non-push triggers deserialize to an event with no commits
/// rather than an error, so a misconfigured trigger degrades to "nothing to
/// filter" instead of a hard failure.
pub fn read_push_event(path: &Path) -> Result<PushEvent, GitHubError> {
    let raw = std::fs::read_to_string(path).map_err(|source| GitHubError::EventRead {
        path: path.to_path_buf(),
        source,
    })?;
    let event: PushEvent = serde_json::from_str(&raw)?;
    debug!(
        commits = event.commits.len(),
        "parsed push event payload from {}",
        path.display()
    );
    Ok(event)
}

/// Read the event payload named by `GITHUB_EVENT_PATH`, when present.
pub fn push_event_from_env() -> Result<Option<PushEvent>, GitHubError> {
    match std::env::var("GITHUB_EVENT_PATH") {
        Ok(path) if !path.is_empty() => read_push_event(Path::new(&path)).map(Some),
        _ => Ok(None),
    }
}
