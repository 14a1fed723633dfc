//! Runtime core: the control loop and its collaborators.
//!
//! Internal modules:
//! - [`supervisor`]: races interrupt / deadline / completion and reports the
//!   run outcome;
//! - [`runner`]: launches the job on a background task and publishes its
//!   lifecycle events;
//! - [`shutdown`]: OS interrupt subscription with a manual source for tests.

mod runner;
mod shutdown;
mod supervisor;

pub use shutdown::Interrupts;
pub use supervisor::{Outcome, Supervisor};
