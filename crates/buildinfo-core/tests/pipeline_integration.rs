//! Integration tests for the build-information pipeline with in-memory fakes.

use buildinfo_core::fakes::{
    commit_touching, MemoryBuildInformationStore, RecordingReporter, StaticPathResolver,
};
use buildinfo_core::{push_build_information, BuildInfoError};
use buildinfo_domain::{Commit, InputParameters, OverwriteMode, PushEvent, RunContext};

fn sample_context() -> RunContext {
    RunContext {
        server_url: "https://github.com".to_string(),
        owner: "acme".to_string(),
        repo: "widget".to_string(),
        ref_name: "refs/heads/main".to_string(),
        sha: "59d24a63b54de353c80fcdbe8bcf5c17325f963a".to_string(),
        run_id: 987654,
        run_number: 42,
    }
}

fn sample_parameters(paths: &[&str]) -> InputParameters {
    InputParameters {
        branch: None,
        space: "Default".to_string(),
        packages: vec!["Acme.Widget".to_string(), "Acme.Widget.Cli".to_string()],
        version: "1.2.3".to_string(),
        paths: paths.iter().map(|p| p.to_string()).collect(),
        overwrite_mode: OverwriteMode::OverwriteExisting,
        debug: false,
    }
}

fn push_event_with(commits: Vec<Commit>) -> PushEvent {
    PushEvent {
        reference: "refs/heads/main".to_string(),
        before: String::new(),
        after: String::new(),
        created: false,
        deleted: false,
        forced: false,
        base_ref: None,
        commits,
        head_commit: None,
    }
}

/// The three-commit scenario: A touches src/index.ts, B touches README.md,
/// C touches old-file.ts.
fn abc_commits() -> Vec<Commit> {
    vec![
        commit_touching("a", &["src/index.ts"]),
        commit_touching("b", &["README.md"]),
        commit_touching("c", &["old-file.ts"]),
    ]
}

fn abc_resolver() -> StaticPathResolver {
    StaticPathResolver::new()
        .with_paths("a", &["src/index.ts"])
        .with_paths("b", &["README.md"])
        .with_paths("c", &["old-file.ts"])
}

#[tokio::test]
async fn test_exact_patterns_keep_matching_commits_in_order() {
    let store = MemoryBuildInformationStore::new();
    let reporter = RecordingReporter::new();
    let event = push_event_with(abc_commits());

    push_build_information(
        &store,
        &abc_resolver(),
        &reporter,
        &sample_context(),
        &sample_parameters(&["src/index.ts", "README.md"]),
        Some(&event),
    )
    .await
    .unwrap();

    let pushes = store.pushes();
    assert_eq!(pushes.len(), 1);
    let (command, mode) = &pushes[0];
    let ids: Vec<&str> = command.commits.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(*mode, OverwriteMode::OverwriteExisting);
}

#[tokio::test]
async fn test_wildcard_patterns_keep_matching_commits() {
    let store = MemoryBuildInformationStore::new();
    let reporter = RecordingReporter::new();
    let event = push_event_with(abc_commits());

    push_build_information(
        &store,
        &abc_resolver(),
        &reporter,
        &sample_context(),
        &sample_parameters(&["src/**/*.ts", "README.md"]),
        Some(&event),
    )
    .await
    .unwrap();

    let ids: Vec<String> = store.pushes()[0]
        .0
        .commits
        .iter()
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn test_markdown_pattern_keeps_only_the_readme_commit() {
    let store = MemoryBuildInformationStore::new();
    let reporter = RecordingReporter::new();
    let event = push_event_with(abc_commits());

    push_build_information(
        &store,
        &abc_resolver(),
        &reporter,
        &sample_context(),
        &sample_parameters(&["**/*.md"]),
        Some(&event),
    )
    .await
    .unwrap();

    let ids: Vec<String> = store.pushes()[0]
        .0
        .commits
        .iter()
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(ids, vec!["b"]);
}

#[tokio::test]
async fn test_no_matches_under_a_filter_skips_submission() {
    let store = MemoryBuildInformationStore::new();
    let reporter = RecordingReporter::new();
    let event = push_event_with(abc_commits());

    push_build_information(
        &store,
        &abc_resolver(),
        &reporter,
        &sample_context(),
        &sample_parameters(&["non-existent-path"]),
        Some(&event),
    )
    .await
    .unwrap();

    assert_eq!(store.push_count(), 0, "store must not be called");
    assert!(reporter
        .infos()
        .iter()
        .any(|line| line.contains("no build information will be pushed")));
}

#[tokio::test]
async fn test_no_filter_submits_every_commit() {
    let store = MemoryBuildInformationStore::new();
    let reporter = RecordingReporter::new();
    let resolver = StaticPathResolver::new();
    let event = push_event_with(abc_commits());

    push_build_information(
        &store,
        &resolver,
        &reporter,
        &sample_context(),
        &sample_parameters(&[]),
        Some(&event),
    )
    .await
    .unwrap();

    let pushes = store.pushes();
    let (command, _) = &pushes[0];
    assert_eq!(command.commits.len(), 3);
    assert_eq!(resolver.call_count(), 0, "no filter means no lookups");
}

#[tokio::test]
async fn test_no_filter_submits_even_without_commits() {
    let store = MemoryBuildInformationStore::new();
    let reporter = RecordingReporter::new();
    let resolver = StaticPathResolver::new();

    push_build_information(
        &store,
        &resolver,
        &reporter,
        &sample_context(),
        &sample_parameters(&[]),
        None,
    )
    .await
    .unwrap();

    let pushes = store.pushes();
    let (command, _) = &pushes[0];
    assert!(command.commits.is_empty());
    assert_eq!(command.packages.len(), 2);
}

#[tokio::test]
async fn test_one_failed_lookup_fails_the_push_without_partial_submission() {
    let store = MemoryBuildInformationStore::new();
    let reporter = RecordingReporter::new();
    let resolver = StaticPathResolver::new()
        .with_paths("a", &["src/index.ts"])
        .with_transport_failure("b", 404, "commit not found")
        .with_paths("c", &["old-file.ts"]);
    let event = push_event_with(abc_commits());

    let err = push_build_information(
        &store,
        &resolver,
        &reporter,
        &sample_context(),
        &sample_parameters(&["**/*"]),
        Some(&event),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, BuildInfoError::Resolve(_)));
    assert_eq!(store.push_count(), 0);
    assert_eq!(reporter.errors().len(), 1);
}

#[tokio::test]
async fn test_command_carries_run_metadata_and_packages() {
    let store = MemoryBuildInformationStore::new();
    let reporter = RecordingReporter::new();
    let event = push_event_with(abc_commits());

    push_build_information(
        &store,
        &abc_resolver(),
        &reporter,
        &sample_context(),
        &sample_parameters(&[]),
        Some(&event),
    )
    .await
    .unwrap();

    let pushes = store.pushes();
    let (command, _) = &pushes[0];
    assert_eq!(command.space_name, "Default");
    assert_eq!(command.build_environment, "GitHub Actions");
    assert_eq!(command.build_number, "42");
    assert_eq!(
        command.build_url,
        "https://github.com/acme/widget/actions/runs/987654"
    );
    assert_eq!(command.branch, "main");
    assert_eq!(command.vcs_type, "Git");
    assert_eq!(command.vcs_root, "https://github.com/acme/widget");
    assert_eq!(
        command.vcs_commit_number,
        "59d24a63b54de353c80fcdbe8bcf5c17325f963a"
    );
    let versions: Vec<&str> = command
        .packages
        .iter()
        .map(|p| p.version.as_str())
        .collect();
    assert_eq!(versions, vec!["1.2.3", "1.2.3"]);
    assert!(reporter
        .infos()
        .iter()
        .any(|line| line.contains("successfully pushed build information")));
}

#[tokio::test]
async fn test_branch_override_wins_over_the_ref() {
    let store = MemoryBuildInformationStore::new();
    let reporter = RecordingReporter::new();
    let mut parameters = sample_parameters(&[]);
    parameters.branch = Some("release/1.2".to_string());

    push_build_information(
        &store,
        &StaticPathResolver::new(),
        &reporter,
        &sample_context(),
        &parameters,
        None,
    )
    .await
    .unwrap();

    assert_eq!(store.pushes()[0].0.branch, "release/1.2");
}

#[tokio::test]
async fn test_missing_run_id_fails_before_any_remote_call() {
    let store = MemoryBuildInformationStore::new();
    let reporter = RecordingReporter::new();
    let resolver = abc_resolver();
    let mut context = sample_context();
    context.run_id = 0;
    let event = push_event_with(abc_commits());

    let err = push_build_information(
        &store,
        &resolver,
        &reporter,
        &context,
        &sample_parameters(&["**/*"]),
        Some(&event),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, BuildInfoError::MissingContext(_)));
    assert_eq!(resolver.call_count(), 0);
    assert_eq!(store.push_count(), 0);
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let store = MemoryBuildInformationStore::failing_with(409, "build information already exists");
    let reporter = RecordingReporter::new();

    let err = push_build_information(
        &store,
        &StaticPathResolver::new(),
        &reporter,
        &sample_context(),
        &sample_parameters(&[]),
        None,
    )
    .await
    .unwrap_err();

    match err {
        BuildInfoError::Store(store_err) => {
            assert!(store_err.to_string().contains("409"));
        }
        other => panic!("expected Store error, got {other}"),
    }
}

#[tokio::test]
async fn test_debug_mode_reports_command_and_matched_ids() {
    let store = MemoryBuildInformationStore::new();
    let reporter = RecordingReporter::new();
    let mut parameters = sample_parameters(&["**/*.md"]);
    parameters.debug = true;
    let event = push_event_with(abc_commits());

    push_build_information(
        &store,
        &abc_resolver(),
        &reporter,
        &sample_context(),
        &parameters,
        Some(&event),
    )
    .await
    .unwrap();

    let debugs = reporter.debugs();
    assert!(debugs
        .iter()
        .any(|line| line.contains("matched the following commits") && line.contains('b')));
    assert!(debugs
        .iter()
        .any(|line| line.contains("build information") && line.contains("BuildNumber")));
}
