//! # Supervisor: bounded-time control loop over a one-shot job.
//!
//! The [`Supervisor`] owns the event bus, a [`SubscriberSet`], and the
//! runtime [`Config`]. It launches the job on a background task and then
//! races three sources until one of them ends the run:
//!
//! ```text
//! Supervisor::run(job)
//!   ├─► Interrupts::register()                 (SIGINT / Ctrl-C, once)
//!   ├─► runner::launch(job, token, bus)        (background task)
//!   └─► loop {
//!         select! {
//!           interrupt  ─► publish InterruptReceived, token.cancel(),
//!                         disarm interrupt source, keep waiting
//!           deadline   ─► publish DeadlineExceeded,
//!                         return Outcome::DeadlineExceeded
//!           completion ─► return Outcome::Completed / Outcome::Failed(e)
//!         }
//!       }
//! ```
//!
//! ## Rules
//! - The deadline timer is constructed fresh on every loop turn: each event
//!   that wakes the loop re-arms a full `Config::deadline` window (rolling
//!   timeout, not an absolute one).
//! - The first interrupt disarms the interrupt branch; a second interrupt
//!   has no additional effect.
//! - Requesting shutdown never blocks the loop: the token is fire-and-forget
//!   and the job polls it at its own checkpoints.
//! - The deadline path does not wait for the job: the background task is
//!   abandoned as-is. Callers are expected to terminate the process.
//! - A job that dies without reporting (panic) disarms the completion branch
//!   and the run ends on the deadline, whatever the job's state was.
//!
//! ## State machine
//! `Running` → `InterruptedWaiting` on the first interrupt; either state
//! reaches `Done` on deadline (terminal, exit 1) or on completion receipt
//! (terminal, returns to caller).

use std::sync::Arc;

use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::core::{runner, shutdown::Interrupts};
use crate::error::{JobError, RuntimeError};
use crate::events::{Bus, Event, EventKind};
use crate::jobs::JobRef;
use crate::subscribers::{Subscribe, SubscriberSet};

/// Terminal result of a supervised run.
///
/// A job-level failure is still an orderly completion: only the deadline
/// path maps to a non-zero exit code.
#[derive(Debug)]
pub enum Outcome {
    /// The job ran to completion successfully.
    Completed,
    /// The job reported a failure (e.g. the early-shutdown sentinel).
    Failed(JobError),
    /// The deadline elapsed before the job completed; the run was abandoned.
    DeadlineExceeded,
}

impl Outcome {
    /// Returns the process exit code for this outcome.
    ///
    /// `0` for [`Outcome::Completed`] and [`Outcome::Failed`], `1` for
    /// [`Outcome::DeadlineExceeded`].
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Completed | Outcome::Failed(_) => 0,
            Outcome::DeadlineExceeded => 1,
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            Outcome::Completed => "completed",
            Outcome::Failed(_) => "failed",
            Outcome::DeadlineExceeded => "deadline_exceeded",
        }
    }

    /// True if the run was abandoned on the deadline.
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, Outcome::DeadlineExceeded)
    }
}

/// Coordinates the job launch, event delivery, and the three-way race
/// between interrupt, deadline, and completion.
pub struct Supervisor {
    /// Global runtime configuration.
    pub cfg: Config,
    /// Event bus shared with the job launcher.
    pub bus: Bus,
    /// Fan-out set for subscribers.
    pub subs: Arc<SubscriberSet>,
}

impl Supervisor {
    /// Creates a new supervisor with the given config and subscribers.
    pub fn new(cfg: Config, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        let bus = Bus::new(cfg.bus_capacity);
        let subs = Arc::new(SubscriberSet::new(subscribers));
        Self { cfg, bus, subs }
    }

    /// Runs `job` under supervision with OS interrupt delivery.
    ///
    /// Registers the interrupt listener once, then drives the control loop.
    /// Returns [`RuntimeError::Signal`] if registration fails.
    pub async fn run(&self, job: JobRef) -> Result<Outcome, RuntimeError> {
        let interrupts = Interrupts::register().map_err(|source| RuntimeError::Signal { source })?;
        Ok(self.supervise(job, interrupts).await)
    }

    /// Drives the control loop with an explicit interrupt source.
    ///
    /// This is [`Supervisor::run`] minus the OS wiring; pair it with
    /// [`Interrupts::channel`] to drive interrupts manually.
    pub async fn supervise(&self, job: JobRef, mut interrupts: Interrupts) -> Outcome {
        self.subscriber_listener();

        let token = CancellationToken::new();
        let mut completion = runner::launch(job, token.clone(), self.bus.clone());

        // Branch guards: the interrupt arm fires at most once per run, and
        // the completion arm is retired if the job dies without reporting.
        let mut armed = true;
        let mut pending = true;

        loop {
            tokio::select! {
                maybe = interrupts.recv(), if armed => {
                    armed = false;
                    if maybe.is_some() {
                        self.bus.publish(Event::new(EventKind::InterruptReceived));
                        token.cancel();
                    }
                }
                // A fresh timer every turn: the window restarts after each event.
                _ = time::sleep(self.cfg.deadline) => {
                    self.bus.publish(
                        Event::new(EventKind::DeadlineExceeded).with_deadline(self.cfg.deadline),
                    );
                    return Outcome::DeadlineExceeded;
                }
                res = &mut completion, if pending => {
                    match res {
                        Ok(Ok(())) => return Outcome::Completed,
                        Ok(Err(e)) => return Outcome::Failed(e),
                        Err(_) => {
                            self.bus.publish(Event::new(EventKind::JobAborted));
                            pending = false;
                        }
                    }
                }
            }
        }
    }

    /// Subscribes to the bus and forwards events to the subscriber set
    /// (fire-and-forget).
    fn subscriber_listener(&self) {
        let mut rx = self.bus.subscribe();
        let set = Arc::clone(&self.subs);
        tokio::spawn(async move {
            while let Ok(ev) = rx.recv().await {
                set.emit(&ev);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::{JobFn, Step, StepJob};
    use std::time::Duration;

    fn supervisor(deadline: Duration) -> Supervisor {
        let cfg = Config {
            deadline,
            bus_capacity: 64,
        };
        Supervisor::new(cfg, Vec::new())
    }

    fn staged(delays_ms: &[u64]) -> JobRef {
        let steps = delays_ms
            .iter()
            .enumerate()
            .map(|(i, ms)| Step::delay(format!("task-{}", i + 1), Duration::from_millis(*ms)))
            .collect();
        StepJob::arc("pipeline", steps)
    }

    fn drain_kinds(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> Vec<EventKind> {
        let mut kinds = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            kinds.push(ev.kind);
        }
        kinds
    }

    #[tokio::test]
    async fn test_completes_within_deadline() {
        let sup = supervisor(Duration::from_secs(5));
        let (_tx, interrupts) = Interrupts::channel();

        let outcome = sup.supervise(staged(&[10, 5, 5]), interrupts).await;
        assert!(matches!(outcome, Outcome::Completed), "got {outcome:?}");
        assert_eq!(outcome.exit_code(), 0);
    }

    #[tokio::test]
    async fn test_interrupt_before_first_step_is_observed_after_it() {
        let sup = supervisor(Duration::from_secs(5));
        let (tx, interrupts) = Interrupts::channel();
        tx.send(()).await.expect("slot is free");

        let outcome = sup.supervise(staged(&[20, 20, 20]), interrupts).await;
        match &outcome {
            Outcome::Failed(e) => assert!(e.is_early_shutdown(), "got {e:?}"),
            other => panic!("expected early shutdown, got {other:?}"),
        }
        // A job-level failure is still an orderly exit.
        assert_eq!(outcome.exit_code(), 0);
    }

    #[tokio::test]
    async fn test_interrupt_after_last_checkpoint_is_not_observed() {
        let sup = supervisor(Duration::from_secs(5));
        let (tx, interrupts) = Interrupts::channel();

        // The final step raises the interrupt itself, then keeps working:
        // there is no checkpoint left to observe it.
        let job = StepJob::arc(
            "pipeline",
            vec![
                Step::delay("task-1", Duration::from_millis(5)),
                Step::delay("task-2", Duration::from_millis(5)),
                Step::new("task-3", move || {
                    let tx = tx.clone();
                    async move {
                        tx.send(()).await.map_err(JobError::fail)?;
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        Ok(())
                    }
                }),
            ],
        );

        let outcome = sup.supervise(job, interrupts).await;
        assert!(matches!(outcome, Outcome::Completed), "got {outcome:?}");
    }

    #[tokio::test]
    async fn test_deadline_ends_the_run_regardless_of_job_state() {
        let sup = supervisor(Duration::from_millis(50));
        let (_tx, interrupts) = Interrupts::channel();
        let job = JobFn::arc("slow", |_ctx: CancellationToken| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(())
        });

        let outcome = sup.supervise(job, interrupts).await;
        assert!(outcome.is_deadline_exceeded(), "got {outcome:?}");
        assert_eq!(outcome.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_second_interrupt_has_no_additional_effect() {
        let sup = supervisor(Duration::from_secs(5));
        let (tx, interrupts) = Interrupts::channel();

        let sender = tokio::spawn(async move {
            tx.send(()).await.expect("first send");
            tokio::time::sleep(Duration::from_millis(10)).await;
            // The branch is disarmed by now; this one is never consumed.
            tx.send(()).await.expect("second send");
        });

        let outcome = sup.supervise(staged(&[30, 30, 30]), interrupts).await;
        sender.await.expect("sender task");
        match outcome {
            Outcome::Failed(e) => assert!(e.is_early_shutdown(), "got {e:?}"),
            other => panic!("expected early shutdown, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_interrupt_rearms_the_deadline_window() {
        // Deadline 300ms, job 400ms: without the re-arm the run would be
        // abandoned at 300ms. The interrupt at ~200ms restarts the window
        // (new expiry ~500ms), so the job finishes first.
        let sup = supervisor(Duration::from_millis(300));
        let (tx, interrupts) = Interrupts::channel();

        let sender = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            tx.send(()).await.expect("send");
        });

        // Ignores cancellation entirely; completes at 400ms.
        let job = JobFn::arc("steady", |_ctx: CancellationToken| async {
            tokio::time::sleep(Duration::from_millis(400)).await;
            Ok(())
        });

        let outcome = sup.supervise(job, interrupts).await;
        sender.await.expect("sender task");
        assert!(matches!(outcome, Outcome::Completed), "got {outcome:?}");
    }

    #[tokio::test]
    async fn test_panicked_job_is_logged_and_ends_on_deadline() {
        let sup = supervisor(Duration::from_millis(50));
        let mut events = sup.bus.subscribe();
        let (_tx, interrupts) = Interrupts::channel();
        let job = JobFn::arc("kaboom", |_ctx: CancellationToken| async { panic!("unexpected") });

        let outcome = sup.supervise(job, interrupts).await;
        assert!(outcome.is_deadline_exceeded(), "got {outcome:?}");

        let kinds = drain_kinds(&mut events);
        assert!(kinds.contains(&EventKind::JobAborted), "got {kinds:?}");
        assert!(kinds.contains(&EventKind::DeadlineExceeded), "got {kinds:?}");
    }

    #[tokio::test]
    async fn test_exactly_one_terminal_event_per_run() {
        let sup = supervisor(Duration::from_secs(5));
        let mut events = sup.bus.subscribe();
        let (_tx, interrupts) = Interrupts::channel();

        let outcome = sup.supervise(staged(&[5, 5]), interrupts).await;
        assert!(matches!(outcome, Outcome::Completed), "got {outcome:?}");

        let kinds = drain_kinds(&mut events);
        let starts = kinds.iter().filter(|k| **k == EventKind::JobStarting).count();
        let terminals = kinds
            .iter()
            .filter(|k| matches!(**k, EventKind::JobCompleted | EventKind::JobFailed))
            .count();
        assert_eq!(starts, 1, "got {kinds:?}");
        assert_eq!(terminals, 1, "got {kinds:?}");
    }
}
