//! Runtime events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to events emitted by the supervisor and the job
//! launcher during a run.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] - event classification and payload metadata
//! - [`Bus`] - thin wrapper over `tokio::sync::broadcast`

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
