//! Octopus Deploy build-information client.
//!
//! The store takes one request per package: `POST
//! {server}/api/{space}/build-information?overwriteMode={mode}` with the
//! package identity and the shared build metadata in the body. The API key
//! travels in the `X-Octopus-ApiKey` header.

use async_trait::async_trait;
use buildinfo_core::{BuildInformationStore, StoreError};
use buildinfo_domain::{BuildInformationCommand, BuildInformationCommit, OverwriteMode};
use serde::Serialize;
use tracing::{debug, info};

const API_KEY_HEADER: &str = "X-Octopus-ApiKey";
const USER_AGENT: &str = concat!("buildinfo-octopus/", env!("CARGO_PKG_VERSION"));

/// Octopus server configuration
#[derive(Debug, Clone)]
pub struct OctopusConfig {
    /// Octopus server URL
    pub server_url: String,
    /// API key
    pub api_key: String,
}

impl OctopusConfig {
    /// Create config for a specific server.
    pub fn new(server_url: &str, api_key: &str) -> Self {
        OctopusConfig {
            server_url: server_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Create config from `OCTOPUS_URL` and `OCTOPUS_API_KEY`.
    pub fn from_env() -> Option<Self> {
        let server_url = std::env::var("OCTOPUS_URL").ok()?;
        let api_key = std::env::var("OCTOPUS_API_KEY").ok()?;
        Some(OctopusConfig::new(&server_url, &api_key))
    }
}

/// Body of one build-information submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct BuildInformationRequest<'a> {
    package_id: &'a str,
    version: &'a str,
    octopus_build_information: BuildMetadata<'a>,
}

/// The build metadata shared by every package in a command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct BuildMetadata<'a> {
    build_environment: &'a str,
    build_number: &'a str,
    build_url: &'a str,
    branch: &'a str,
    vcs_type: &'a str,
    vcs_root: &'a str,
    vcs_commit_number: &'a str,
    commits: &'a [BuildInformationCommit],
}

impl<'a> BuildInformationRequest<'a> {
    fn for_package(command: &'a BuildInformationCommand, index: usize) -> Self {
        let package = &command.packages[index];
        BuildInformationRequest {
            package_id: &package.id,
            version: &package.version,
            octopus_build_information: BuildMetadata {
                build_environment: &command.build_environment,
                build_number: &command.build_number,
                build_url: &command.build_url,
                branch: &command.branch,
                vcs_type: &command.vcs_type,
                vcs_root: &command.vcs_root,
                vcs_commit_number: &command.vcs_commit_number,
                commits: &command.commits,
            },
        }
    }
}

/// Client for the Octopus build-information API
pub struct OctopusClient {
    config: OctopusConfig,
    http_client: reqwest::Client,
}

impl OctopusClient {
    /// Create a new Octopus client.
    pub fn new(config: OctopusConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to create HTTP client");

        OctopusClient {
            config,
            http_client,
        }
    }

    fn build_information_url(&self, space: &str, overwrite_mode: OverwriteMode) -> String {
        format!(
            "{}/api/{}/build-information?overwriteMode={}",
            self.config.server_url, space, overwrite_mode
        )
    }
}

fn to_store_error(err: reqwest::Error) -> StoreError {
    match err.status() {
        Some(status) => StoreError::Transport {
            status: status.as_u16(),
            message: err.to_string(),
        },
        None => StoreError::Other(err.to_string()),
    }
}

#[async_trait]
impl BuildInformationStore for OctopusClient {
    async fn push(
        &self,
        command: &BuildInformationCommand,
        overwrite_mode: OverwriteMode,
    ) -> Result<(), StoreError> {
        let url = self.build_information_url(&command.space_name, overwrite_mode);

        for index in 0..command.packages.len() {
            let request = BuildInformationRequest::for_package(command, index);
            debug!(package = %request.package_id, version = %request.version, "pushing build information");

            let response = self
                .http_client
                .post(&url)
                .header(API_KEY_HEADER, self.config.api_key.as_str())
                .json(&request)
                .send()
                .await
                .map_err(to_store_error)?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(StoreError::Transport {
                    status: status.as_u16(),
                    message,
                });
            }

            info!(package = %request.package_id, "build information accepted");
        }

        Ok(())
    }
}
