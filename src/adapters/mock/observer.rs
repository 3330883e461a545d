//! Observer that records notifications for assertions.

use std::cell::RefCell;
use std::rc::Rc;

use crate::traits::{MenuAimObserver, StateChange};

/// A single recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedEvent<I> {
    Activated(I),
    Deactivated(I),
    MouseEnter(Option<I>),
    MouseLeave(Option<I>),
    State(StateChange<I>),
}

/// Records every notification in order. Clones share the log.
#[derive(Debug)]
pub struct RecordingObserver<I> {
    events: Rc<RefCell<Vec<ObservedEvent<I>>>>,
}

impl<I> Clone for RecordingObserver<I> {
    fn clone(&self) -> Self {
        Self {
            events: Rc::clone(&self.events),
        }
    }
}

impl<I> Default for RecordingObserver<I> {
    fn default() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<I: Clone> RecordingObserver<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ObservedEvent<I>> {
        self.events.borrow().clone()
    }

    /// Items passed to `on_activate`, in order.
    pub fn activations(&self) -> Vec<I> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ObservedEvent::Activated(item) => Some(item.clone()),
                _ => None,
            })
            .collect()
    }

    /// Items passed to `on_deactivate`, in order.
    pub fn deactivations(&self) -> Vec<I> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ObservedEvent::Deactivated(item) => Some(item.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, event: ObservedEvent<I>) {
        self.events.borrow_mut().push(event);
    }
}

impl<I: Clone> MenuAimObserver<I> for RecordingObserver<I> {
    fn on_activate(&mut self, item: &I) {
        self.push(ObservedEvent::Activated(item.clone()));
    }

    fn on_deactivate(&mut self, item: &I) {
        self.push(ObservedEvent::Deactivated(item.clone()));
    }

    fn on_mouse_enter(&mut self, active: Option<&I>) {
        self.push(ObservedEvent::MouseEnter(active.cloned()));
    }

    fn on_mouse_leave(&mut self, active: Option<&I>) {
        self.push(ObservedEvent::MouseLeave(active.cloned()));
    }

    fn on_state_change(&mut self, change: StateChange<I>) {
        self.push(ObservedEvent::State(change));
    }
}
