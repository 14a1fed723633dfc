//! # Global runtime configuration.
//!
//! Provides [`Config`], the centralized settings for the supervisor runtime.
//!
//! ## Field semantics
//! - `deadline`: maximum wall-clock wait per control-loop iteration before the
//!   run is abandoned. The timer is re-armed on every loop turn, so this is a
//!   rolling window, not an absolute deadline.
//! - `bus_capacity`: event bus ring buffer size (min 1; clamped by the Bus).

use std::time::Duration;

/// Global configuration for the supervisor runtime.
#[derive(Clone, Debug)]
pub struct Config {
    /// Maximum time the control loop waits, per iteration, for an interrupt
    /// or the job's completion before reporting
    /// [`Outcome::DeadlineExceeded`](crate::Outcome::DeadlineExceeded).
    ///
    /// Any event that wakes the loop (an interrupt, a job crash) re-arms the
    /// timer for another full `deadline`.
    pub deadline: Duration,

    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// Slow subscribers that lag behind more than `bus_capacity` events will
    /// observe `Lagged` and skip older items. Minimum value is 1 (enforced by
    /// the Bus).
    pub bus_capacity: usize,
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `deadline = 5s`
    /// - `bus_capacity = 256`
    fn default() -> Self {
        Self {
            deadline: Duration::from_secs(5),
            bus_capacity: 256,
        }
    }
}
