//! Buildinfo Octopus - build-information store client
//!
//! Implements the `BuildInformationStore` contract against the Octopus
//! Deploy HTTP API. One submission per package identity, all sharing the
//! command's build metadata; the first rejected submission aborts the rest.

pub mod client;

pub use client::{OctopusClient, OctopusConfig};
