//! Commit filtering against path patterns.

use crate::error::Result;
use crate::matcher::PathMatcher;
use crate::report::Reporter;
use crate::resolver::{PathResolver, ResolveError};
use buildinfo_domain::Commit;
use futures::future;

/// Filter `commits` down to the ones whose changed paths match at least one
/// of `patterns`.
///
/// - Empty `commits` yields an empty result without touching the resolver.
/// - Empty `patterns` means "no filter": the full input list is returned
///   unchanged, again without touching the resolver.
/// - Otherwise the changed paths of every commit are resolved concurrently
///   and joined in input order, so the result is always a subsequence of the
///   input regardless of resolution timing.
///
/// One failed lookup fails the whole batch: the reporter receives exactly
/// one error report (transport errors with their status and message, other
/// errors generically) and the error is returned. Partial results are never
/// produced.
pub async fn filter_commits(
    reporter: &dyn Reporter,
    commits: &[Commit],
    patterns: &[String],
    resolver: &dyn PathResolver,
) -> Result<Vec<Commit>> {
    if commits.is_empty() {
        return Ok(Vec::new());
    }

    if patterns.is_empty() {
        return Ok(commits.to_vec());
    }

    let matcher = PathMatcher::new(patterns)?;

    reporter.debug(&format!(
        "resolving changed paths for {} commits against {} patterns",
        commits.len(),
        patterns.len()
    ));

    let lookups = commits.iter().map(|commit| resolver.touched_paths(commit));
    let resolved = match future::try_join_all(lookups).await {
        Ok(resolved) => resolved,
        Err(err) => {
            match &err {
                ResolveError::Transport { status, message } => reporter.error(
                    &format!("commit lookup failed with status {status}: {message}"),
                    Some(&err),
                ),
                ResolveError::Other(_) => reporter.error("commit lookup failed", Some(&err)),
            }
            return Err(err.into());
        }
    };

    let matched = commits
        .iter()
        .zip(resolved.iter())
        .filter(|(_, paths)| paths.iter().any(|path| matcher.matches(path)))
        .map(|(commit, _)| commit.clone())
        .collect();

    Ok(matched)
}
