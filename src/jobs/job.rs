//! # Job abstraction.
//!
//! A [`Job`] is the unit of work placed under supervision: async, named, and
//! cooperatively cancelable. It receives a [`CancellationToken`] and should
//! poll it at points where stopping early is safe.
//!
//! The common handle type is [`JobRef`], an `Arc<dyn Job>` suitable for
//! handing to the supervisor.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::JobError;

/// Shared reference to a job.
pub type JobRef = Arc<dyn Job>;

/// # Asynchronous, cancelable unit of work.
///
/// A `Job` has a stable [`name`](Job::name) and an async [`run`](Job::run)
/// method that receives a [`CancellationToken`]. Cancellation is cooperative:
/// the token is only a request, and the job decides where it is safe to honor
/// it. A job that observes the token and stops early reports
/// [`JobError::EarlyShutdown`].
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use tokio_util::sync::CancellationToken;
/// use runvisor::{Job, JobError};
///
/// struct Demo;
///
/// #[async_trait]
/// impl Job for Demo {
///     fn name(&self) -> &str { "demo" }
///
///     async fn run(&self, ctx: CancellationToken) -> Result<(), JobError> {
///         if ctx.is_cancelled() {
///             return Err(JobError::EarlyShutdown);
///         }
///         // do work...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Job: Send + Sync + 'static {
    /// Returns a stable, human-readable job name.
    fn name(&self) -> &str;

    /// Executes the job until completion or an early shutdown.
    async fn run(&self, ctx: CancellationToken) -> Result<(), JobError>;
}
