//! Retry scheduling abstraction.
//!
//! When the pointer is travelling toward open content, activation of the
//! hovered item is re-tried after a delay. The scheduler only has to deliver
//! a [`RetryTicket`] back to the event loop once the delay has elapsed; the
//! state machine decides what the ticket means.

use std::time::Duration;

use uuid::Uuid;

/// Identifies one scheduled retry of one bound menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RetryTicket {
    /// The bound menu the retry belongs to.
    pub instance: Uuid,
    /// Monotonic counter; only the latest generation is honoured.
    pub generation: u64,
}

/// Cancellation handle for a scheduled retry.
///
/// Dropping the guard cancels the retry. Holding at most one guard per menu
/// therefore means at most one retry can ever be outstanding.
pub struct RetryGuard {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl RetryGuard {
    /// Guard that runs `cancel` when dropped or cancelled.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Guard with nothing to cancel.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Cancel the retry now. Subsequent calls and the eventual drop are no-ops.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for RetryGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for RetryGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryGuard")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Trait for deferring a retry.
///
/// Implementations must not call back into the state machine synchronously;
/// the ticket is handed to [`crate::machine::MenuAim::on_retry`] by the
/// owner of the event loop.
pub trait RetryScheduler {
    /// Arrange for `ticket` to be delivered after `delay`.
    fn schedule(&mut self, ticket: RetryTicket, delay: Duration) -> RetryGuard;
}

impl<S: RetryScheduler + ?Sized> RetryScheduler for Box<S> {
    fn schedule(&mut self, ticket: RetryTicket, delay: Duration) -> RetryGuard {
        (**self).schedule(ticket, delay)
    }
}
