//! GitHub push-event payload types.
//!
//! Deserialized from the JSON document GitHub writes to `GITHUB_EVENT_PATH`
//! for `push` triggers. Only `id`, `message` and the three path lists are
//! consumed downstream; the remaining fields are carried so the payload
//! round-trips faithfully.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author or committer identity on a push commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// GitHub login, when the address maps to an account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// A single commit as delivered in a push event.
///
/// The path lists default to empty: GitHub omits them on oversized pushes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    /// Commit SHA.
    pub id: String,
    /// Tree SHA.
    #[serde(default)]
    pub tree_id: String,
    /// Whether this commit is distinct from any previously pushed commit.
    #[serde(default)]
    pub distinct: bool,
    /// Full commit message.
    pub message: String,
    /// Commit timestamp.
    pub timestamp: DateTime<Utc>,
    /// API URL for the commit.
    #[serde(default)]
    pub url: String,
    /// Commit author.
    pub author: CommitUser,
    /// Commit committer.
    pub committer: CommitUser,
    /// Paths added by this commit.
    #[serde(default)]
    pub added: Vec<String>,
    /// Paths removed by this commit.
    #[serde(default)]
    pub removed: Vec<String>,
    /// Paths modified by this commit.
    #[serde(default)]
    pub modified: Vec<String>,
}

impl Commit {
    /// Union of added, modified and removed paths, in payload order.
    pub fn touched_paths(&self) -> Vec<String> {
        let mut paths =
            Vec::with_capacity(self.added.len() + self.modified.len() + self.removed.len());
        paths.extend(self.added.iter().cloned());
        paths.extend(self.modified.iter().cloned());
        paths.extend(self.removed.iter().cloned());
        paths
    }
}

/// GitHub push event envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushEvent {
    /// The git ref that was pushed (e.g. `refs/heads/main`). Empty on
    /// payloads from non-push triggers.
    #[serde(rename = "ref", default)]
    pub reference: String,
    /// SHA before the push.
    #[serde(default)]
    pub before: String,
    /// SHA after the push.
    #[serde(default)]
    pub after: String,
    /// Whether the push created the ref.
    #[serde(default)]
    pub created: bool,
    /// Whether the push deleted the ref.
    #[serde(default)]
    pub deleted: bool,
    /// Whether the push was forced.
    #[serde(default)]
    pub forced: bool,
    /// Base ref for merge pushes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_ref: Option<String>,
    /// Commits contained in the push, oldest first.
    #[serde(default)]
    pub commits: Vec<Commit>,
    /// The commit the ref now points at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_commit: Option<Commit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PUSH: &str = r#"{
        "ref": "refs/heads/main",
        "before": "0000000000000000000000000000000000000000",
        "after": "59d24a63b54de353c80fcdbe8bcf5c17325f963a",
        "created": true,
        "deleted": false,
        "forced": false,
        "commits": [
            {
                "id": "59d24a63b54de353c80fcdbe8bcf5c17325f963a",
                "tree_id": "f9b07ec7f9a77652e9e3bd5c016d5156ff185449",
                "distinct": true,
                "message": "Add release notes",
                "timestamp": "2024-03-05T19:40:15-05:00",
                "url": "https://github.com/acme/widget/commit/59d24a63",
                "author": { "name": "Dev One", "email": "dev@example.com", "username": "devone" },
                "committer": { "name": "Dev One", "email": "dev@example.com" },
                "added": ["docs/release-notes.md"],
                "removed": [],
                "modified": ["README.md"]
            }
        ],
        "head_commit": null
    }"#;

    #[test]
    fn test_push_event_deserializes() {
        let event: PushEvent = serde_json::from_str(SAMPLE_PUSH).unwrap();
        assert_eq!(event.reference, "refs/heads/main");
        assert!(event.created);
        assert_eq!(event.commits.len(), 1);

        let commit = &event.commits[0];
        assert_eq!(commit.id, "59d24a63b54de353c80fcdbe8bcf5c17325f963a");
        assert_eq!(commit.message, "Add release notes");
        assert_eq!(commit.author.username.as_deref(), Some("devone"));
        assert_eq!(commit.committer.username, None);
        assert_eq!(commit.added, vec!["docs/release-notes.md"]);
        assert_eq!(commit.modified, vec!["README.md"]);
    }

    #[test]
    fn test_commit_timestamp_normalises_to_utc() {
        let event: PushEvent = serde_json::from_str(SAMPLE_PUSH).unwrap();
        let ts = event.commits[0].timestamp;
        // -05:00 offset in the payload, stored as UTC
        assert_eq!(ts.to_rfc3339(), "2024-03-06T00:40:15+00:00");
    }

    #[test]
    fn test_missing_path_lists_default_to_empty() {
        let json = r#"{
            "id": "abc",
            "message": "big push",
            "timestamp": "2024-01-01T00:00:00Z",
            "author": { "name": "a", "email": "a@example.com" },
            "committer": { "name": "a", "email": "a@example.com" }
        }"#;
        let commit: Commit = serde_json::from_str(json).unwrap();
        assert!(commit.added.is_empty());
        assert!(commit.removed.is_empty());
        assert!(commit.modified.is_empty());
        assert!(commit.touched_paths().is_empty());
    }

    #[test]
    fn test_touched_paths_preserves_payload_order() {
        let event: PushEvent = serde_json::from_str(SAMPLE_PUSH).unwrap();
        let paths = event.commits[0].touched_paths();
        assert_eq!(paths, vec!["docs/release-notes.md", "README.md"]);
    }
}
