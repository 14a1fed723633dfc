//! Error types used by the runvisor runtime and supervised jobs.
//!
//! This module defines two error enums:
//!
//! - [`RuntimeError`] - errors raised by the supervision runtime itself.
//! - [`JobError`] - errors raised by the supervised job.
//!
//! Both types provide an `as_label` helper producing short stable strings
//! for logs and metrics.

use thiserror::Error;

/// # Errors produced by the supervision runtime.
///
/// These represent failures of the control loop's own machinery, not of the
/// job it supervises. Deadline exhaustion is deliberately **not** an error:
/// it is a terminal [`Outcome`](crate::Outcome).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// OS interrupt notifications could not be registered.
    #[error("failed to register interrupt handler: {source}")]
    Signal {
        /// The underlying registration failure.
        #[source]
        source: std::io::Error,
    },
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::Signal { .. } => "runtime_signal",
        }
    }
}

/// # Errors produced by job execution.
///
/// The supervised scenario has a single sentinel: the job observed the
/// shutdown signal at a checkpoint and stopped early. [`JobError::Fail`]
/// exists for user-provided step actions that can fail on their own.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum JobError {
    /// The job observed the shutdown signal between steps and stopped early.
    #[error("early shutdown")]
    EarlyShutdown,

    /// A step action failed.
    #[error("step failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },
}

impl JobError {
    /// Builds a [`JobError::Fail`] from any displayable error.
    pub fn fail(error: impl std::fmt::Display) -> Self {
        JobError::Fail {
            error: error.to_string(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use runvisor::JobError;
    ///
    /// assert_eq!(JobError::EarlyShutdown.as_label(), "job_early_shutdown");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            JobError::EarlyShutdown => "job_early_shutdown",
            JobError::Fail { .. } => "job_failed",
        }
    }

    /// True if this is the early-shutdown sentinel.
    ///
    /// # Example
    /// ```
    /// use runvisor::JobError;
    ///
    /// assert!(JobError::EarlyShutdown.is_early_shutdown());
    /// assert!(!JobError::fail("boom").is_early_shutdown());
    /// ```
    pub fn is_early_shutdown(&self) -> bool {
        matches!(self, JobError::EarlyShutdown)
    }
}
