//! Closure-based observer.
//!
//! Mirrors the four optional callbacks a menu binding accepts: activate,
//! deactivate, mouse enter and mouse leave. Each receives the relevant item.

use crate::traits::{MenuAimObserver, StateChange};

type ItemCallback<I> = Box<dyn FnMut(&I)>;
type OptionalItemCallback<I> = Box<dyn FnMut(Option<&I>)>;
type StateCallback<I> = Box<dyn FnMut(StateChange<I>)>;

/// Observer built from optional closures.
///
/// # Example
///
/// ```
/// use menu_aim::adapters::CallbackObserver;
///
/// let observer = CallbackObserver::<usize>::new()
///     .with_activate(|item| println!("open submenu {}", item))
///     .with_deactivate(|item| println!("close submenu {}", item));
/// # let _ = observer;
/// ```
pub struct CallbackObserver<I> {
    activate: Option<ItemCallback<I>>,
    deactivate: Option<ItemCallback<I>>,
    mouse_enter: Option<OptionalItemCallback<I>>,
    mouse_leave: Option<OptionalItemCallback<I>>,
    state_change: Option<StateCallback<I>>,
}

impl<I> Default for CallbackObserver<I> {
    fn default() -> Self {
        Self {
            activate: None,
            deactivate: None,
            mouse_enter: None,
            mouse_leave: None,
            state_change: None,
        }
    }
}

impl<I> CallbackObserver<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activate(mut self, f: impl FnMut(&I) + 'static) -> Self {
        self.activate = Some(Box::new(f));
        self
    }

    pub fn with_deactivate(mut self, f: impl FnMut(&I) + 'static) -> Self {
        self.deactivate = Some(Box::new(f));
        self
    }

    pub fn with_mouse_enter(mut self, f: impl FnMut(Option<&I>) + 'static) -> Self {
        self.mouse_enter = Some(Box::new(f));
        self
    }

    pub fn with_mouse_leave(mut self, f: impl FnMut(Option<&I>) + 'static) -> Self {
        self.mouse_leave = Some(Box::new(f));
        self
    }

    pub fn with_state_change(mut self, f: impl FnMut(StateChange<I>) + 'static) -> Self {
        self.state_change = Some(Box::new(f));
        self
    }
}

impl<I> MenuAimObserver<I> for CallbackObserver<I> {
    fn on_activate(&mut self, item: &I) {
        if let Some(f) = self.activate.as_mut() {
            f(item);
        }
    }

    fn on_deactivate(&mut self, item: &I) {
        if let Some(f) = self.deactivate.as_mut() {
            f(item);
        }
    }

    fn on_mouse_enter(&mut self, active: Option<&I>) {
        if let Some(f) = self.mouse_enter.as_mut() {
            f(active);
        }
    }

    fn on_mouse_leave(&mut self, active: Option<&I>) {
        if let Some(f) = self.mouse_leave.as_mut() {
            f(active);
        }
    }

    fn on_state_change(&mut self, change: StateChange<I>) {
        if let Some(f) = self.state_change.as_mut() {
            f(change);
        }
    }
}

impl<I> std::fmt::Debug for CallbackObserver<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackObserver")
            .field("activate", &self.activate.is_some())
            .field("deactivate", &self.deactivate.is_some())
            .field("mouse_enter", &self.mouse_enter.is_some())
            .field("mouse_leave", &self.mouse_leave.is_some())
            .field("state_change", &self.state_change.is_some())
            .finish()
    }
}

/// Fan a notification out to two observers, left first.
impl<I: Clone, A: MenuAimObserver<I>, B: MenuAimObserver<I>> MenuAimObserver<I> for (A, B) {
    fn on_activate(&mut self, item: &I) {
        self.0.on_activate(item);
        self.1.on_activate(item);
    }

    fn on_deactivate(&mut self, item: &I) {
        self.0.on_deactivate(item);
        self.1.on_deactivate(item);
    }

    fn on_mouse_enter(&mut self, active: Option<&I>) {
        self.0.on_mouse_enter(active);
        self.1.on_mouse_enter(active);
    }

    fn on_mouse_leave(&mut self, active: Option<&I>) {
        self.0.on_mouse_leave(active);
        self.1.on_mouse_leave(active);
    }

    fn on_state_change(&mut self, change: StateChange<I>) {
        self.0.on_state_change(change.clone());
        self.1.on_state_change(change);
    }
}
