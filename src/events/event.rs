//! # Runtime events emitted during a supervised run.
//!
//! [`EventKind`] classifies the lifecycle of a single run: the job's
//! start/terminal transitions and the control loop's interrupt and deadline
//! transitions. The [`Event`] struct carries metadata such as the timestamp,
//! job name, failure reason, and the configured deadline.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! delivered out of order.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of runtime events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Job lifecycle events ===
    /// Job execution is starting on its background task.
    ///
    /// Sets:
    /// - `job`: job name
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    JobStarting,

    /// Job ran to completion successfully.
    ///
    /// Sets:
    /// - `job`: job name
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    JobCompleted,

    /// Job reported a failure (including the early-shutdown sentinel).
    ///
    /// Sets:
    /// - `job`: job name
    /// - `reason`: failure message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    JobFailed,

    /// Job's background task died without reporting a result (panic).
    ///
    /// The control loop keeps waiting; the deadline eventually ends the run.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    JobAborted,

    // === Control loop events ===
    /// OS interrupt observed; shutdown was requested from the job.
    ///
    /// Emitted at most once per run (the interrupt source is disarmed after
    /// the first delivery).
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    InterruptReceived,

    /// Deadline elapsed before the job completed; the run is abandoned.
    ///
    /// Sets:
    /// - `deadline_ms`: configured deadline (ms)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    DeadlineExceeded,
}

/// Runtime event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Name of the job, if applicable.
    pub job: Option<Arc<str>>,
    /// Human-readable reason (failure messages).
    pub reason: Option<Arc<str>>,
    /// Configured deadline in milliseconds (compact).
    pub deadline_ms: Option<u32>,
}

impl Event {
    /// Creates a new event of the given kind with the current timestamp and
    /// the next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            job: None,
            reason: None,
            deadline_ms: None,
        }
    }

    /// Attaches a job name.
    #[inline]
    pub fn with_job(mut self, job: impl Into<Arc<str>>) -> Self {
        self.job = Some(job.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches the configured deadline (stored as milliseconds).
    #[inline]
    pub fn with_deadline(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u32::MAX)) as u32;
        self.deadline_ms = Some(ms);
        self
    }
}
