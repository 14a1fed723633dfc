//! Demo: a three-step pipeline under bounded-time supervision.
//!
//! Runs a fixed sequence of simulated work steps while the supervisor races
//! Ctrl-C, the 5-second deadline, and completion. Exit code 0 on normal
//! completion (including a reported job error), 1 when the deadline wins.

use std::{sync::Arc, time::Duration};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use runvisor::{Config, JobRef, LogWriter, Outcome, Step, StepJob, Subscribe, Supervisor};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) logger
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("launching processor");

    // 2) supervisor
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
    let sup = Supervisor::new(Config::default(), subs);

    // 3) the staged job (simulated work)
    let job: JobRef = StepJob::arc(
        "processor",
        vec![
            Step::delay("task-1", Duration::from_secs(2)),
            Step::delay("task-2", Duration::from_secs(1)),
            Step::delay("task-3", Duration::from_secs(1)),
        ],
    );

    // 4) run until completion, interrupt, or deadline
    let outcome = sup.run(job).await?;
    if let Outcome::Failed(err) = &outcome {
        warn!(error = %err, "process ended with message");
    }
    if outcome.is_deadline_exceeded() {
        // Immediate termination: the abandoned job gets no cleanup.
        std::process::exit(outcome.exit_code());
    }

    info!("process ended");
    Ok(())
}
