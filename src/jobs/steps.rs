//! # Staged job: a deterministic step sequence.
//!
//! [`StepJob`] runs its [`Step`]s strictly in order and polls the shutdown
//! token **after every step except the last**. A set token makes the job
//! abort at that checkpoint with [`JobError::EarlyShutdown`].
//!
//! ## Checkpoint placement
//! ```text
//! step 1 ──► poll token ──► step 2 ──► poll token ──► step 3 ──► done
//!                │                         │
//!                └── cancelled? ───────────┴──► Err(EarlyShutdown)
//! ```
//!
//! There is no checkpoint after the final step: a shutdown requested while
//! the last step is running is never observed, and the job completes
//! normally. Cancellation is also never checked *during* a step, only
//! between them.

use std::borrow::Cow;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::JobError;
use crate::jobs::job::Job;

/// Boxed future produced by a step action.
pub type BoxStepFuture = Pin<Box<dyn Future<Output = Result<(), JobError>> + Send>>;

/// A single named stage of a [`StepJob`].
///
/// The action closure creates a fresh future each time the step runs.
pub struct Step {
    name: Cow<'static, str>,
    action: Box<dyn Fn() -> BoxStepFuture + Send + Sync>,
}

impl Step {
    /// Creates a step from an async action.
    pub fn new<F, Fut>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), JobError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            action: Box::new(move || Box::pin(f())),
        }
    }

    /// Creates a step that simulates work by sleeping for `dur`.
    pub fn delay(name: impl Into<Cow<'static, str>>, dur: Duration) -> Self {
        Self::new(name, move || async move {
            tokio::time::sleep(dur).await;
            Ok(())
        })
    }

    /// Returns the step name.
    pub fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Result<(), JobError> {
        (self.action)().await
    }
}

/// A job that executes a fixed sequence of steps with cooperative shutdown
/// checks at step boundaries.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use runvisor::{JobRef, Step, StepJob};
///
/// let job: JobRef = StepJob::arc(
///     "processor",
///     vec![
///         Step::delay("task-1", Duration::from_millis(20)),
///         Step::delay("task-2", Duration::from_millis(10)),
///         Step::delay("task-3", Duration::from_millis(10)),
///     ],
/// );
/// assert_eq!(job.name(), "processor");
/// ```
pub struct StepJob {
    name: Cow<'static, str>,
    steps: Vec<Step>,
}

impl StepJob {
    /// Creates a new staged job.
    pub fn new(name: impl Into<Cow<'static, str>>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Creates the job and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self::new(name, steps))
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if the job has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[async_trait]
impl Job for StepJob {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, ctx: CancellationToken) -> Result<(), JobError> {
        let last = self.steps.len().checked_sub(1);

        for (idx, step) in self.steps.iter().enumerate() {
            step.run().await?;
            info!(job = %self.name, step = %step.name(), "step finished");

            // Checkpoint between steps; the final step has none after it.
            if Some(idx) != last && ctx.is_cancelled() {
                debug!(job = %self.name, "stop signal observed at checkpoint");
                return Err(JobError::EarlyShutdown);
            }
        }

        Ok(())
    }
}
