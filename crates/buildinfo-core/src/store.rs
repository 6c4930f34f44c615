//! BuildInformationStore - the submission boundary
//!
//! The assembler hands one command to this contract and treats it as
//! all-or-nothing; store-specific error taxonomies stay behind it.

use async_trait::async_trait;
use buildinfo_domain::{BuildInformationCommand, OverwriteMode};
use thiserror::Error;

/// Errors a build-information submission can fail with
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store rejected the submission with an HTTP-like status
    #[error("status {status}: {message}")]
    Transport { status: u16, message: String },

    /// Any other submission failure
    #[error("{0}")]
    Other(String),
}

/// Accepts assembled build-information commands.
#[async_trait]
pub trait BuildInformationStore: Send + Sync {
    /// Submit the command under the given overwrite policy.
    ///
    /// Either the whole command is recorded for every package it names, or
    /// an error is returned and nothing is recorded.
    async fn push(
        &self,
        command: &BuildInformationCommand,
        overwrite_mode: OverwriteMode,
    ) -> std::result::Result<(), StoreError>;
}
