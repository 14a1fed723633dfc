//! # runvisor
//!
//! **Runvisor** is a bounded-time supervision runtime for one-shot staged
//! jobs: it launches a job on a background task, watches for an OS
//! interrupt, enforces a wall-clock deadline, and collects a single
//! success/failure outcome.
//!
//! ## Architecture
//! ```text
//!     ┌─────────────┐                       ┌──────────────────────────┐
//!     │   JobRef    │── runner::launch ────►│  background task         │
//!     │ (user job)  │                       │  run(token) → completion │
//!     └─────────────┘                       └───────────┬──────────────┘
//!                                                       │ oneshot
//! ┌─────────────────────────────────────────────────────▼───────────────┐
//! │  Supervisor (control loop)                                          │
//! │  select! {                                                          │
//! │    interrupt   → cancel token, disarm source, keep waiting          │
//! │    deadline    → Outcome::DeadlineExceeded (job abandoned)          │
//! │    completion  → Outcome::Completed / Outcome::Failed               │
//! │  }                                                                  │
//! └───────────────────────────┬─────────────────────────────────────────┘
//!                             │ publish(Event)
//!                             ▼
//!                  Bus ──► SubscriberSet ──► LogWriter / custom
//! ```
//!
//! ## Lifecycle
//! ```text
//! JobStarting ──► [steps, shutdown checkpoints between them]
//!                     ├─ all steps done          ─► JobCompleted
//!                     ├─ checkpoint saw shutdown ─► JobFailed("early shutdown")
//!                     └─ panic                   ─► JobAborted, deadline ends the run
//! ```
//!
//! The deadline window is **rolling**: every event that wakes the control
//! loop (an interrupt, a job crash) re-arms a full `Config::deadline` wait.
//! Cancellation is cooperative and checked only between steps; a shutdown
//! requested during the final step is never observed.
//!
//! ## Example
//! ```rust
//! use std::{sync::Arc, time::Duration};
//! use runvisor::{Config, JobRef, LogWriter, Step, StepJob, Subscribe, Supervisor};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut cfg = Config::default();
//!     cfg.deadline = Duration::from_millis(500);
//!
//!     let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
//!     let sup = Supervisor::new(cfg, subs);
//!
//!     let job: JobRef = StepJob::arc(
//!         "demo",
//!         vec![
//!             Step::delay("task-1", Duration::from_millis(20)),
//!             Step::delay("task-2", Duration::from_millis(10)),
//!         ],
//!     );
//!
//!     let outcome = sup.run(job).await?;
//!     assert_eq!(outcome.exit_code(), 0);
//!     Ok(())
//! }
//! ```

mod config;
mod core;
mod error;
mod events;
mod jobs;
mod subscribers;

// ---- Public re-exports ----

pub use config::Config;
pub use crate::core::{Interrupts, Outcome, Supervisor};
pub use error::{JobError, RuntimeError};
pub use events::{Bus, Event, EventKind};
pub use jobs::{Job, JobFn, JobRef, Step, StepJob};
pub use subscribers::{LogWriter, Subscribe, SubscriberSet};
