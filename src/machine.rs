//! Activation state machine.
//!
//! [`MenuAim`] owns the "currently active item" of one bound menu. Hover
//! requests consult the [`IntentEvaluator`]; when the pointer looks like it is
//! travelling toward the active item's content, the switch is deferred and
//! re-tried after the configured delay. Clicks bypass the heuristic.
//!
//! ```text
//!            request_activate (switch) / click_activate
//!   ┌──────┐ ─────────────────────────────────────────▶ ┌────────┐
//!   │ Idle │                                            │ Active │ ◀─┐ request_activate
//!   └──────┘ ◀───────────────────────────────────────── └────────┘ ──┘ (switch: other item,
//!            leave (switch) / outside click                             wait: schedule retry)
//! ```
//!
//! At most one retry is outstanding per machine: every decision cycle drops
//! the previous [`RetryGuard`] (cancelling its task) before anything new is
//! scheduled, and a delivered ticket is honoured only if it is still the
//! pending one.

use std::time::Duration;

use uuid::Uuid;

use crate::config::MenuAimConfig;
use crate::geometry::{Point, Region};
use crate::intent::{IntentEvaluator, IntentState, Verdict};
use crate::pointer::PointerTracker;
use crate::traits::{MenuAimObserver, RetryGuard, RetryScheduler, RetryTicket, StateChange};

/// A scheduled re-try of `request_activate(item)`.
#[derive(Debug)]
struct PendingRetry<I> {
    item: I,
    ticket: RetryTicket,
    _guard: RetryGuard,
}

/// Activation state for one bound menu.
pub struct MenuAim<I, S, O> {
    id: Uuid,
    evaluator: IntentEvaluator,
    tracker: PointerTracker,
    delay: Duration,
    active: Option<I>,
    intent: IntentState,
    pending: Option<PendingRetry<I>>,
    generation: u64,
    bound: bool,
    scheduler: S,
    observer: O,
}

impl<I, S, O> MenuAim<I, S, O>
where
    I: Clone + PartialEq + std::fmt::Debug,
    S: RetryScheduler,
    O: MenuAimObserver<I>,
{
    /// Create the machine for a menu whose items occupy `region`.
    pub fn new(
        region: Region,
        config: &MenuAimConfig,
        tracker: PointerTracker,
        scheduler: S,
        observer: O,
    ) -> Self {
        let evaluator = IntentEvaluator::new(region, config.threshold, config.content_direction);
        let id = Uuid::new_v4();
        tracing::debug!(
            instance = %id,
            direction = %config.content_direction,
            threshold = config.threshold,
            delay_ms = config.delay_ms,
            "menu-aim instance created"
        );
        Self {
            id,
            evaluator,
            tracker,
            delay: config.delay(),
            active: None,
            intent: IntentState::default(),
            pending: None,
            generation: 0,
            bound: true,
            scheduler,
            observer,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn active_item(&self) -> Option<&I> {
        self.active.as_ref()
    }

    pub fn is_delaying(&self) -> bool {
        self.intent.is_delaying()
    }

    /// Sample at which the machine last decided to wait.
    pub fn last_checked(&self) -> Option<Point> {
        self.intent.last_checked()
    }

    /// Ticket of the outstanding retry, if any.
    pub fn pending_retry(&self) -> Option<RetryTicket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    /// Item the outstanding retry will try to activate.
    pub fn pending_item(&self) -> Option<&I> {
        self.pending.as_ref().map(|p| &p.item)
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn evaluator(&self) -> &IntentEvaluator {
        &self.evaluator
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Try to make `item` active, deferring if the pointer is heading for the
    /// current item's content.
    pub fn request_activate(&mut self, item: I) {
        if !self.bound {
            return;
        }
        self.cancel_pending();
        match self.evaluate() {
            Verdict::Switch(_) => self.activate(item),
            Verdict::Wait => self.schedule_retry(item),
        }
    }

    /// Pointer entered `item`.
    ///
    /// Same as [`request_activate`](Self::request_activate), and additionally
    /// reports a menu enter when nothing was active beforehand.
    pub fn item_enter(&mut self, item: I) {
        if !self.bound {
            return;
        }
        let entering_menu = self.active.is_none();
        self.request_activate(item);
        if entering_menu {
            self.observer.on_mouse_enter(self.active.as_ref());
        }
    }

    /// A scheduled retry fired.
    ///
    /// Returns `false` when the ticket is stale (superseded, cancelled, for
    /// another instance, or the menu was unbound) and nothing happened.
    pub fn on_retry(&mut self, ticket: RetryTicket) -> bool {
        if !self.bound || self.pending_retry() != Some(ticket) {
            tracing::trace!(instance = %self.id, ?ticket, "ignoring stale retry");
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };
        tracing::debug!(instance = %self.id, generation = ticket.generation, "retrying activation");
        self.request_activate(pending.item);
        true
    }

    /// Pointer left the whole menu.
    ///
    /// Deactivates only if the pointer is not merely dipping toward the
    /// active content.
    pub fn request_deactivate_on_leave(&mut self) {
        if !self.bound {
            return;
        }
        if self.evaluate().is_switch() {
            self.cancel_pending();
            self.observer.on_mouse_leave(self.active.as_ref());
            self.deactivate_active();
        }
    }

    /// Explicit click on `item`: activate immediately.
    pub fn click_activate(&mut self, item: I) {
        if !self.bound {
            return;
        }
        self.cancel_pending();
        self.end_delay();
        self.activate(item);
    }

    /// A click landed somewhere on screen.
    ///
    /// Clicks outside the menu deactivate the active item without consulting
    /// the evaluator. A deferred activation is dropped as well so the menu
    /// does not reopen after being dismissed.
    pub fn outside_click_deactivate(&mut self, target_inside_menu: bool) {
        if !self.bound || target_inside_menu {
            return;
        }
        self.cancel_pending();
        self.end_delay();
        self.deactivate_active();
    }

    /// Stop reacting to requests and cancel any outstanding retry.
    ///
    /// Returns `false` if the machine was already unbound.
    pub fn unbind(&mut self) -> bool {
        if !self.bound {
            return false;
        }
        self.bound = false;
        self.cancel_pending();
        tracing::debug!(instance = %self.id, "menu-aim instance unbound");
        true
    }

    fn evaluate(&mut self) -> Verdict {
        let was_delaying = self.intent.is_delaying();
        let samples = self.tracker.samples();
        let verdict = self
            .evaluator
            .should_switch(&mut self.intent, self.active.is_some(), &samples);

        match (was_delaying, self.intent.is_delaying()) {
            (false, true) => self.observer.on_state_change(StateChange::DelayStarted),
            (true, false) => self.observer.on_state_change(StateChange::DelayEnded),
            _ => {}
        }
        verdict
    }

    /// Leave the delaying state without a verdict.
    fn end_delay(&mut self) {
        let was_delaying = self.intent.is_delaying();
        self.intent.clear();
        if was_delaying {
            self.observer.on_state_change(StateChange::DelayEnded);
        }
    }

    fn activate(&mut self, item: I) {
        if self.active.as_ref() == Some(&item) {
            return;
        }
        self.deactivate_active();
        tracing::debug!(instance = %self.id, ?item, "activating item");
        self.active = Some(item.clone());
        self.observer.on_state_change(StateChange::ItemMarked(item.clone()));
        self.observer.on_activate(&item);
    }

    fn deactivate_active(&mut self) {
        if let Some(item) = self.active.take() {
            tracing::debug!(instance = %self.id, ?item, "deactivating item");
            self.observer.on_state_change(StateChange::ItemUnmarked(item.clone()));
            self.observer.on_deactivate(&item);
        }
    }

    fn schedule_retry(&mut self, item: I) {
        self.generation += 1;
        let ticket = RetryTicket {
            instance: self.id,
            generation: self.generation,
        };
        tracing::debug!(instance = %self.id, generation = ticket.generation, ?item, "deferring activation");
        let guard = self.scheduler.schedule(ticket, self.delay);
        self.pending = Some(PendingRetry {
            item,
            ticket,
            _guard: guard,
        });
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::trace!(instance = %self.id, generation = pending.ticket.generation, "cancelling pending retry");
        }
    }
}

impl<I, S, O> std::fmt::Debug for MenuAim<I, S, O>
where
    I: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuAim")
            .field("id", &self.id)
            .field("active", &self.active)
            .field("intent", &self.intent)
            .field("pending", &self.pending.as_ref().map(|p| p.ticket))
            .field("bound", &self.bound)
            .finish()
    }
}
