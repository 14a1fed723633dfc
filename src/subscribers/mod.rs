//! # Event subscribers for the runvisor runtime.
//!
//! Provides the [`Subscribe`] trait, the [`SubscriberSet`] fan-out, and the
//! built-in [`LogWriter`] that renders events through `tracing`.
//!
//! ## Event flow
//! ```text
//! launcher / control loop ── publish(Event) ──► Bus ──► supervisor listener
//!                                                            │
//!                                                   SubscriberSet::emit(&Event)
//!                                                     ┌───────┴───────┐
//!                                                     ▼               ▼
//!                                                 [queue S1]  ...  [queue SN]
//!                                                     ▼               ▼
//!                                              sub1.on_event()  subN.on_event()
//! ```

mod log;
mod set;
mod subscriber;

pub use log::LogWriter;
pub use set::SubscriberSet;
pub use subscriber::Subscribe;
