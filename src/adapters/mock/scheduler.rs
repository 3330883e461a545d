//! Hand-cranked retry scheduler for testing.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::traits::{RetryGuard, RetryScheduler, RetryTicket};

/// One retry handed to the scheduler.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledRetry {
    pub ticket: RetryTicket,
    pub delay: Duration,
    pub cancelled: bool,
    pub fired: bool,
}

impl ScheduledRetry {
    fn is_live(&self) -> bool {
        !self.cancelled && !self.fired
    }
}

/// Scheduler whose retries fire only when the test asks.
///
/// Clones share the same schedule, so a test can keep one handle while the
/// state machine owns another.
///
/// # Example
///
/// ```
/// use menu_aim::adapters::mock::ManualScheduler;
/// use menu_aim::traits::{RetryScheduler, RetryTicket};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let mut handle = scheduler.clone();
/// let ticket = RetryTicket { instance: uuid::Uuid::nil(), generation: 1 };
/// let guard = handle.schedule(ticket, Duration::from_millis(200));
///
/// assert_eq!(scheduler.live().len(), 1);
/// drop(guard);
/// assert!(scheduler.was_cancelled(ticket));
/// assert!(scheduler.fire_all().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    entries: Rc<RefCell<Vec<ScheduledRetry>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every retry ever scheduled, in order.
    pub fn history(&self) -> Vec<ScheduledRetry> {
        self.entries.borrow().clone()
    }

    /// Retries that are neither cancelled nor fired.
    pub fn live(&self) -> Vec<ScheduledRetry> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.is_live())
            .cloned()
            .collect()
    }

    /// Mark every live retry as fired and return their tickets.
    pub fn fire_all(&self) -> Vec<RetryTicket> {
        let mut entries = self.entries.borrow_mut();
        entries
            .iter_mut()
            .filter(|e| e.is_live())
            .map(|e| {
                e.fired = true;
                e.ticket
            })
            .collect()
    }

    pub fn was_cancelled(&self, ticket: RetryTicket) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|e| e.ticket == ticket && e.cancelled)
    }
}

impl RetryScheduler for ManualScheduler {
    fn schedule(&mut self, ticket: RetryTicket, delay: Duration) -> RetryGuard {
        self.entries.borrow_mut().push(ScheduledRetry {
            ticket,
            delay,
            cancelled: false,
            fired: false,
        });
        let entries = Rc::clone(&self.entries);
        RetryGuard::new(move || {
            if let Some(entry) = entries
                .borrow_mut()
                .iter_mut()
                .find(|e| e.ticket == ticket && !e.fired)
            {
                entry.cancelled = true;
            }
        })
    }
}
