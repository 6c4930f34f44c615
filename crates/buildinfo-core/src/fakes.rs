//! In-memory fakes for pipeline collaborators (testing only)
//!
//! Provides `StaticPathResolver`, `RecordingReporter` and
//! `MemoryBuildInformationStore` that satisfy the trait contracts without
//! any network access, plus a commit builder for test payloads.

use std::collections::HashMap;
use std::error::Error;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use buildinfo_domain::{BuildInformationCommand, Commit, CommitUser, OverwriteMode};

use crate::report::Reporter;
use crate::resolver::{PathResolver, ResolveError, ResolveResult};
use crate::store::{BuildInformationStore, StoreError};

/// Build a push-event commit whose `added` list is `paths`.
pub fn commit_touching(id: &str, paths: &[&str]) -> Commit {
    let user = CommitUser {
        name: "Dev One".to_string(),
        email: "dev@example.com".to_string(),
        username: None,
    };
    Commit {
        id: id.to_string(),
        tree_id: String::new(),
        distinct: true,
        message: format!("commit {id}"),
        timestamp: Utc::now(),
        url: String::new(),
        author: user.clone(),
        committer: user,
        added: paths.iter().map(|p| p.to_string()).collect(),
        removed: Vec::new(),
        modified: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// StaticPathResolver
// ---------------------------------------------------------------------------

/// Resolver backed by a `commit id -> paths` map.
///
/// Commits without a recorded entry fail with `ResolveError::Other`;
/// commits registered via `with_transport_failure` fail with a transport
/// error. Every call is recorded so tests can assert call counts.
#[derive(Debug, Default)]
pub struct StaticPathResolver {
    paths: HashMap<String, Vec<String>>,
    transport_failures: HashMap<String, (u16, String)>,
    delays_ms: HashMap<String, u64>,
    calls: Mutex<Vec<String>>,
}

impl StaticPathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the paths returned for a commit id.
    pub fn with_paths(mut self, commit_id: &str, paths: &[&str]) -> Self {
        self.paths.insert(
            commit_id.to_string(),
            paths.iter().map(|p| p.to_string()).collect(),
        );
        self
    }

    /// Make lookups for a commit id fail with a transport error.
    pub fn with_transport_failure(mut self, commit_id: &str, status: u16, message: &str) -> Self {
        self.transport_failures
            .insert(commit_id.to_string(), (status, message.to_string()));
        self
    }

    /// Delay lookups for a commit id, to exercise out-of-order completion.
    pub fn with_delay(mut self, commit_id: &str, millis: u64) -> Self {
        self.delays_ms.insert(commit_id.to_string(), millis);
        self
    }

    /// Number of lookups issued so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Commit ids looked up, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PathResolver for StaticPathResolver {
    async fn touched_paths(&self, commit: &Commit) -> ResolveResult<Vec<String>> {
        self.calls.lock().unwrap().push(commit.id.clone());

        if let Some(millis) = self.delays_ms.get(&commit.id) {
            tokio::time::sleep(std::time::Duration::from_millis(*millis)).await;
        }

        if let Some((status, message)) = self.transport_failures.get(&commit.id) {
            return Err(ResolveError::Transport {
                status: *status,
                message: message.clone(),
            });
        }

        self.paths
            .get(&commit.id)
            .cloned()
            .ok_or_else(|| ResolveError::Other(format!("no recorded paths for commit {}", commit.id)))
    }
}

// ---------------------------------------------------------------------------
// RecordingReporter
// ---------------------------------------------------------------------------

/// Severity of a recorded report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Debug,
    Warn,
    Error,
}

/// Reporter that records every report line for later assertion.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<(ReportLevel, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, level: ReportLevel, message: &str) {
        self.lines.lock().unwrap().push((level, message.to_string()));
    }

    /// Every recorded line, in order.
    pub fn lines(&self) -> Vec<(ReportLevel, String)> {
        self.lines.lock().unwrap().clone()
    }

    fn at_level(&self, level: ReportLevel) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Messages reported at info level.
    pub fn infos(&self) -> Vec<String> {
        self.at_level(ReportLevel::Info)
    }

    /// Messages reported at debug level.
    pub fn debugs(&self) -> Vec<String> {
        self.at_level(ReportLevel::Debug)
    }

    /// Messages reported at error level.
    pub fn errors(&self) -> Vec<String> {
        self.at_level(ReportLevel::Error)
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.record(ReportLevel::Info, message);
    }

    fn debug(&self, message: &str) {
        self.record(ReportLevel::Debug, message);
    }

    fn warn(&self, message: &str) {
        self.record(ReportLevel::Warn, message);
    }

    fn error(&self, message: &str, _error: Option<&(dyn Error + 'static)>) {
        self.record(ReportLevel::Error, message);
    }
}

// ---------------------------------------------------------------------------
// MemoryBuildInformationStore
// ---------------------------------------------------------------------------

/// Store that records pushed commands instead of submitting them.
#[derive(Debug, Default)]
pub struct MemoryBuildInformationStore {
    pushes: Mutex<Vec<(BuildInformationCommand, OverwriteMode)>>,
    failure: Option<(u16, String)>,
}

impl MemoryBuildInformationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every push fail with a transport error.
    pub fn failing_with(status: u16, message: &str) -> Self {
        MemoryBuildInformationStore {
            pushes: Mutex::new(Vec::new()),
            failure: Some((status, message.to_string())),
        }
    }

    /// Number of commands pushed so far.
    pub fn push_count(&self) -> usize {
        self.pushes.lock().unwrap().len()
    }

    /// Every pushed command with its overwrite mode, in push order.
    pub fn pushes(&self) -> Vec<(BuildInformationCommand, OverwriteMode)> {
        self.pushes.lock().unwrap().clone()
    }
}

#[async_trait]
impl BuildInformationStore for MemoryBuildInformationStore {
    async fn push(
        &self,
        command: &BuildInformationCommand,
        overwrite_mode: OverwriteMode,
    ) -> std::result::Result<(), StoreError> {
        if let Some((status, message)) = &self.failure {
            return Err(StoreError::Transport {
                status: *status,
                message: message.clone(),
            });
        }
        self.pushes
            .lock()
            .unwrap()
            .push((command.clone(), overwrite_mode));
        Ok(())
    }
}
