//! Build-information assembly and submission.

use crate::error::{BuildInfoError, Result};
use crate::filter::filter_commits;
use crate::report::Reporter;
use crate::resolver::PathResolver;
use crate::store::BuildInformationStore;
use buildinfo_domain::{
    BuildInformationCommand, BuildInformationCommit, Commit, InputParameters, PackageIdentity,
    PushEvent, RunContext, BUILD_ENVIRONMENT, VCS_TYPE_GIT,
};

/// Branch name for a fully-qualified head ref; other refs pass through.
fn branch_from_ref(ref_name: &str) -> &str {
    ref_name.strip_prefix("refs/heads/").unwrap_or(ref_name)
}

/// Assemble build information for the current run and submit it.
///
/// Filters the push event's commits against the requested path patterns,
/// maps the survivors to minimal commit records, pairs every requested
/// package id with the requested version and submits the whole command to
/// the store under the configured overwrite policy.
///
/// When patterns were requested and none of the commits match, nothing is
/// submitted and the function returns successfully after an informational
/// report. Without patterns, submission proceeds even with zero commits.
pub async fn push_build_information(
    store: &dyn BuildInformationStore,
    resolver: &dyn PathResolver,
    reporter: &dyn Reporter,
    context: &RunContext,
    parameters: &InputParameters,
    push_event: Option<&PushEvent>,
) -> Result<()> {
    if context.run_id == 0 {
        return Err(BuildInfoError::MissingContext("run id".to_string()));
    }
    if context.sha.is_empty() {
        return Err(BuildInfoError::MissingContext("commit SHA".to_string()));
    }

    let branch = match &parameters.branch {
        Some(branch) => branch.clone(),
        None => branch_from_ref(&context.ref_name).to_string(),
    };

    let commits: &[Commit] = push_event.map(|event| event.commits.as_slice()).unwrap_or(&[]);

    if parameters.debug && !commits.is_empty() {
        reporter.debug(&format!(
            "push event commits:\n{}",
            serde_json::to_string_pretty(commits)?
        ));
    }

    let matched = filter_commits(reporter, commits, &parameters.paths, resolver).await?;

    if parameters.has_path_filter() {
        if matched.is_empty() {
            reporter.info(
                "none of the commits match the path patterns, no build information will be pushed",
            );
            return Ok(());
        }

        if parameters.debug {
            let ids: Vec<&str> = matched.iter().map(|commit| commit.id.as_str()).collect();
            reporter.debug(&format!("matched the following commits:\n{}", ids.join("\n")));
        }
    }

    let commits: Vec<BuildInformationCommit> = matched
        .iter()
        .map(|commit| BuildInformationCommit {
            id: commit.id.clone(),
            comment: commit.message.clone(),
        })
        .collect();

    let packages: Vec<PackageIdentity> = parameters
        .packages
        .iter()
        .map(|id| PackageIdentity {
            id: id.clone(),
            version: parameters.version.clone(),
        })
        .collect();

    let command = BuildInformationCommand {
        space_name: parameters.space.clone(),
        build_environment: BUILD_ENVIRONMENT.to_string(),
        build_number: context.run_number.to_string(),
        build_url: context.build_url(),
        branch,
        vcs_type: VCS_TYPE_GIT.to_string(),
        vcs_root: context.repository_uri(),
        vcs_commit_number: context.sha.clone(),
        commits,
        packages,
    };

    if parameters.debug {
        reporter.debug(&format!(
            "build information:\n{}",
            serde_json::to_string_pretty(&command)?
        ));
    }

    store.push(&command, parameters.overwrite_mode).await?;

    reporter.info("successfully pushed build information");
    Ok(())
}
