//! Push Build Information - CI provenance reporting CLI
//!
//! The `push-build-information` command runs as a GitHub Actions step:
//! it reads the run context and push-event payload from the environment,
//! filters the pushed commits against optional path patterns and submits
//! the resulting build information to an Octopus Deploy server.
//!
//! ## Inputs
//!
//! Every flag doubles as an environment variable where noted, following the
//! Actions convention of configuring steps through the environment.

use anyhow::{Context, Result};
use buildinfo_core::{
    push_build_information, PathResolver, PayloadPathResolver, TracingReporter,
};
use buildinfo_domain::{InputParameters, OverwriteMode};
use buildinfo_github::{push_event_from_env, run_context_from_env, CommitsClient, CommitsConfig};
use buildinfo_octopus::{OctopusClient, OctopusConfig};
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "push-build-information")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Push build information for the current CI run to Octopus Deploy", long_about = None)]
struct Cli {
    /// Octopus server URL
    #[arg(long, env = "OCTOPUS_URL")]
    server: String,

    /// Octopus API key
    #[arg(long, env = "OCTOPUS_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Target space name
    #[arg(long, env = "OCTOPUS_SPACE", default_value = "Default")]
    space: String,

    /// Package id to associate with this build (repeatable)
    #[arg(long = "package", required = true)]
    packages: Vec<String>,

    /// Version shared by all packages
    #[arg(id = "package_version", long = "package-version")]
    version: String,

    /// Glob pattern selecting relevant commits (repeatable; omit to push
    /// build information for every commit)
    #[arg(long = "path")]
    paths: Vec<String>,

    /// Branch name override (defaults to the branch derived from GITHUB_REF)
    #[arg(long)]
    branch: Option<String>,

    /// Policy when the store already has build information for a package
    #[arg(long, default_value = "FailIfExists")]
    overwrite_mode: OverwriteMode,

    /// Resolve changed paths from the push payload instead of the commits API
    #[arg(long)]
    paths_from_payload: bool,

    /// GitHub token for commits-API lookups
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Report the serialized command and matched commit ids before submitting
    #[arg(long)]
    debug: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose || cli.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    buildinfo_core::init_tracing(cli.json, level);

    let context =
        run_context_from_env().context("failed to read the GitHub Actions run context")?;
    let push_event = push_event_from_env().context("failed to read the push event payload")?;

    let parameters = InputParameters {
        branch: cli.branch,
        space: cli.space,
        packages: cli.packages,
        version: cli.version,
        paths: cli.paths,
        overwrite_mode: cli.overwrite_mode,
        debug: cli.debug,
    };

    let resolver: Box<dyn PathResolver> = if cli.paths_from_payload {
        Box::new(PayloadPathResolver::new())
    } else {
        let mut config = CommitsConfig::new(&context.owner, &context.repo);
        if let Some(token) = &cli.github_token {
            config = config.with_token(token);
        }
        Box::new(CommitsClient::new(config))
    };

    let store = OctopusClient::new(OctopusConfig::new(&cli.server, &cli.api_key));
    let reporter = TracingReporter::new();

    push_build_information(
        &store,
        resolver.as_ref(),
        &reporter,
        &context,
        &parameters,
        push_event.as_ref(),
    )
    .await
    .context("failed to push build information")?;

    Ok(())
}
