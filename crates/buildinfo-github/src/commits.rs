//! GitHub commits-API path resolver.
//!
//! The push payload truncates file lists on oversized pushes, so the
//! authoritative changed-path set for a commit comes from
//! `GET /repos/{owner}/{repo}/commits/{ref}`.

use async_trait::async_trait;
use buildinfo_core::{PathResolver, ResolveError, ResolveResult};
use buildinfo_domain::Commit;
use serde::Deserialize;
use tracing::debug;

const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("buildinfo-github/", env!("CARGO_PKG_VERSION"));

/// Commits-API configuration
#[derive(Debug, Clone)]
pub struct CommitsConfig {
    /// API base URL
    pub api_url: String,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Token for authenticated requests (optional for public repositories)
    pub token: Option<String>,
}

impl CommitsConfig {
    /// Create config for a repository against the public API.
    pub fn new(owner: &str, repo: &str) -> Self {
        CommitsConfig {
            api_url: std::env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: None,
        }
    }

    /// Set the authentication token.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Override the API base URL.
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }
}

/// One changed file on a commit, as returned by the commits API.
#[derive(Debug, Deserialize)]
struct CommitFile {
    filename: String,
}

/// The slice of the commits-API response we consume.
#[derive(Debug, Deserialize)]
struct CommitDetail {
    #[serde(default)]
    files: Option<Vec<CommitFile>>,
}

/// Client for per-commit changed-path lookups.
pub struct CommitsClient {
    config: CommitsConfig,
    http_client: reqwest::Client,
}

impl CommitsClient {
    /// Create a new commits client.
    pub fn new(config: CommitsConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to create HTTP client");

        CommitsClient {
            config,
            http_client,
        }
    }

    fn commit_url(&self, sha: &str) -> String {
        format!(
            "{}/repos/{}/{}/commits/{}",
            self.config.api_url, self.config.owner, self.config.repo, sha
        )
    }
}

fn to_resolve_error(err: reqwest::Error) -> ResolveError {
    match err.status() {
        Some(status) => ResolveError::Transport {
            status: status.as_u16(),
            message: err.to_string(),
        },
        None => ResolveError::Other(err.to_string()),
    }
}

#[async_trait]
impl PathResolver for CommitsClient {
    async fn touched_paths(&self, commit: &Commit) -> ResolveResult<Vec<String>> {
        let url = self.commit_url(&commit.id);
        debug!(commit = %commit.id, "fetching changed paths");

        let mut request = self
            .http_client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(to_resolve_error)?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ResolveError::Transport {
                status: status.as_u16(),
                message,
            });
        }

        let detail: CommitDetail = response.json().await.map_err(to_resolve_error)?;
        Ok(detail
            .files
            .unwrap_or_default()
            .into_iter()
            .map(|file| file.filename)
            .collect())
    }
}
