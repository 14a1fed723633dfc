//! # Launch a job on its background task.
//!
//! [`launch`] spawns the job, publishes its lifecycle events to the [`Bus`],
//! and hands the result back over a single-use completion channel.
//!
//! ## Rules
//! - Publishes `JobStarting` before execution and **exactly one** terminal
//!   event after: `JobCompleted` or `JobFailed`.
//! - Sends **exactly one** completion value on every non-panic path, after
//!   the terminal event is on the bus.
//! - A panic inside the job tears the background task down before the send;
//!   the supervisor observes the closed channel.

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::error::JobError;
use crate::events::{Bus, Event, EventKind};
use crate::jobs::JobRef;

/// Spawns `job` with the given shutdown token and returns the completion
/// channel the control loop waits on.
pub(crate) fn launch(
    job: JobRef,
    token: CancellationToken,
    bus: Bus,
) -> oneshot::Receiver<Result<(), JobError>> {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        bus.publish(Event::new(EventKind::JobStarting).with_job(job.name()));

        let res = job.run(token).await;
        match &res {
            Ok(()) => publish_completed(&bus, job.name()),
            Err(e) => publish_failed(&bus, job.name(), e),
        }

        let _ = tx.send(res);
    });

    rx
}

/// Publishes `JobCompleted`.
fn publish_completed(bus: &Bus, name: &str) {
    bus.publish(Event::new(EventKind::JobCompleted).with_job(name));
}

/// Publishes `JobFailed` with the failure reason.
fn publish_failed(bus: &Bus, name: &str, err: &JobError) {
    bus.publish(
        Event::new(EventKind::JobFailed)
            .with_job(name)
            .with_reason(err.to_string()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::JobFn;

    #[tokio::test]
    async fn test_launch_sends_exactly_one_result() {
        let bus = Bus::new(16);
        let job = JobFn::arc("ok", |_ctx: CancellationToken| async { Ok(()) });

        let rx = launch(job, CancellationToken::new(), bus);
        let res = rx.await.expect("result must be published");
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn test_launch_publishes_terminal_event_before_completion() {
        let bus = Bus::new(16);
        let mut events = bus.subscribe();
        let job = JobFn::arc("nope", |_ctx: CancellationToken| async { Err(JobError::fail("boom")) });

        let rx = launch(job, CancellationToken::new(), bus);
        let res = rx.await.expect("result must be published");
        assert!(matches!(res, Err(JobError::Fail { .. })));

        // Both events are already on the bus once the completion arrives.
        let first = events.try_recv().expect("starting event");
        assert_eq!(first.kind, EventKind::JobStarting);
        let second = events.try_recv().expect("terminal event");
        assert_eq!(second.kind, EventKind::JobFailed);
        assert_eq!(second.reason.as_deref(), Some("step failed: boom"));
    }

    #[tokio::test]
    async fn test_panicking_job_closes_the_channel() {
        let bus = Bus::new(16);
        let job = JobFn::arc("kaboom", |_ctx: CancellationToken| async { panic!("unexpected") });

        let rx = launch(job, CancellationToken::new(), bus);
        assert!(rx.await.is_err(), "no result may be published on panic");
    }
}
