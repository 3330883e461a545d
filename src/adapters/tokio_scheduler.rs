//! Retry scheduler backed by tokio timers.
//!
//! Each retry is a spawned task that sleeps for the delay and then sends its
//! ticket down an unbounded channel. The event loop selects on the receiving
//! end and hands tickets to the owning menu. Dropping the guard aborts the
//! task; a ticket that was already sent is rejected by the state machine.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::traits::{RetryGuard, RetryScheduler, RetryTicket};

/// Scheduler that spawns one sleeping task per retry.
#[derive(Debug, Clone)]
pub struct TokioRetryScheduler {
    tx: mpsc::UnboundedSender<RetryTicket>,
    handle: Handle,
}

impl TokioRetryScheduler {
    /// Create a scheduler sending tickets to `tx`, spawning on `handle`.
    pub fn new(tx: mpsc::UnboundedSender<RetryTicket>, handle: Handle) -> Self {
        Self { tx, handle }
    }

    /// Create a scheduler and its ticket receiver on the current runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<RetryTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx, Handle::current()), rx)
    }
}

impl RetryScheduler for TokioRetryScheduler {
    fn schedule(&mut self, ticket: RetryTicket, delay: Duration) -> RetryGuard {
        let tx = self.tx.clone();
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(ticket).is_err() {
                tracing::debug!(?ticket, "retry receiver dropped");
            }
        });
        RetryGuard::new(move || task.abort())
    }
}
