//! # OS interrupt subscription.
//!
//! [`Interrupts`] delivers interrupt notifications over a single-slot
//! channel: one notification may be pending at a time, and further signals
//! arriving while the slot is occupied are dropped. The supervisor consumes
//! at most one notification per run.
//!
//! ## Sources
//! - [`Interrupts::register`] - the real thing: `SIGINT` on unix, Ctrl-C
//!   elsewhere, subscribed once and forwarded by a background task.
//! - [`Interrupts::channel`] - a manual sender, for tests and embedding.

use std::io;

use tokio::sync::mpsc;

/// Interrupt notification source with a single-slot buffer.
pub struct Interrupts {
    rx: mpsc::Receiver<()>,
}

impl Interrupts {
    /// Subscribes to OS interrupt delivery.
    ///
    /// Returns an error if the signal listener cannot be registered.
    pub fn register() -> io::Result<Self> {
        let (tx, rx) = mpsc::channel(1);

        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};

            let mut sigint = signal(SignalKind::interrupt())?;
            tokio::spawn(async move {
                while sigint.recv().await.is_some() {
                    if forward(&tx).is_err() {
                        break;
                    }
                }
            });
        }

        #[cfg(not(unix))]
        {
            tokio::spawn(async move {
                while tokio::signal::ctrl_c().await.is_ok() {
                    if forward(&tx).is_err() {
                        break;
                    }
                }
            });
        }

        Ok(Self { rx })
    }

    /// Creates a manually driven interrupt source.
    ///
    /// Sends on the returned handle behave like OS signals: the slot holds
    /// one pending notification.
    pub fn channel() -> (mpsc::Sender<()>, Self) {
        let (tx, rx) = mpsc::channel(1);
        (tx, Self { rx })
    }

    /// Waits for the next interrupt.
    ///
    /// Returns `None` when the source is gone (all senders dropped).
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}

/// Forwards one notification, dropping it if the slot is full.
///
/// Errors only when the receiver side is gone.
fn forward(tx: &mpsc::Sender<()>) -> Result<(), ()> {
    match tx.try_send(()) {
        Ok(()) | Err(mpsc::error::TrySendError::Full(())) => Ok(()),
        Err(mpsc::error::TrySendError::Closed(())) => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_manual_source_delivers_notification() {
        let (tx, mut interrupts) = Interrupts::channel();
        tx.send(()).await.expect("slot is free");
        assert_eq!(interrupts.recv().await, Some(()));
    }

    #[tokio::test]
    async fn test_recv_ends_when_sender_dropped() {
        let (tx, mut interrupts) = Interrupts::channel();
        drop(tx);
        assert_eq!(interrupts.recv().await, None);
    }

    #[tokio::test]
    async fn test_pending_slot_drops_extra_notifications() {
        let (tx, mut interrupts) = Interrupts::channel();
        tx.send(()).await.expect("slot is free");
        assert!(forward(&tx).is_ok(), "full slot is not an error");

        assert_eq!(interrupts.recv().await, Some(()));
        // Only the buffered notification is there; the extra one was dropped.
        assert!(interrupts.rx.try_recv().is_err());
    }
}
