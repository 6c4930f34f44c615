//! Reporter - the injected observability sink
//!
//! Progress and error reporting goes through this trait so tests can assert
//! on what was reported; it is never used for control flow. Production
//! wiring uses [`TracingReporter`], tests use `fakes::RecordingReporter`.

use std::error::Error;

/// Observability sink threaded through the filter and assembler.
pub trait Reporter: Send + Sync {
    /// Progress visible in normal runs.
    fn info(&self, message: &str);

    /// Verbose diagnostics.
    fn debug(&self, message: &str);

    /// Recoverable oddities.
    fn warn(&self, message: &str);

    /// Failures, optionally with the underlying error.
    fn error(&self, message: &str, error: Option<&(dyn Error + 'static)>);
}

/// Reporter that forwards to the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str, error: Option<&(dyn Error + 'static)>) {
        match error {
            Some(err) => tracing::error!(error = %err, "{message}"),
            None => tracing::error!("{message}"),
        }
    }
}
