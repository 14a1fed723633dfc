//! # Built-in logging subscriber.
//!
//! [`LogWriter`] renders runtime events through `tracing`, one line per
//! event:
//!
//! ```text
//! INFO  job starting job=processor
//! INFO  interrupt received, requesting shutdown
//! WARN  job failed job=processor reason="early shutdown"
//! ERROR deadline exceeded, abandoning run deadline_ms=5000
//! ```

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Renders each runtime event as a structured `tracing` record.
///
/// Suitable as the only subscriber of a demo/CLI run; implement a custom
/// [`Subscribe`] for metrics or alerting.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        let job = e.job.as_deref().unwrap_or("-");
        match e.kind {
            EventKind::JobStarting => {
                info!(job, "job starting");
            }
            EventKind::JobCompleted => {
                info!(job, "job completed");
            }
            EventKind::JobFailed => {
                let reason = e.reason.as_deref().unwrap_or("unknown");
                warn!(job, reason, "job failed");
            }
            EventKind::JobAborted => {
                warn!("job died without reporting a result");
            }
            EventKind::InterruptReceived => {
                info!("interrupt received, requesting shutdown");
            }
            EventKind::DeadlineExceeded => {
                error!(deadline_ms = e.deadline_ms, "deadline exceeded, abandoning run");
            }
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
