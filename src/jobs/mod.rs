//! # Job abstractions.
//!
//! This module provides the job-related types:
//! - [`Job`] - trait for implementing async cancelable jobs
//! - [`JobRef`] - shared reference to a job (`Arc<dyn Job>`)
//! - [`JobFn`] - function-backed job implementation
//! - [`Step`], [`StepJob`] - a deterministic step sequence with cooperative
//!   shutdown checks at step boundaries

mod job;
mod job_fn;
mod steps;

pub use job::{Job, JobRef};
pub use job_fn::JobFn;
pub use steps::{Step, StepJob};
