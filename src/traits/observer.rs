//! Observer contract for activation side effects.
//!
//! The state machine never touches presentation directly. Everything a
//! renderer needs (which item is highlighted, whether the menu is holding off
//! a switch) is announced through [`MenuAimObserver`].

/// Presentation-level change announced by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange<I> {
    /// The pointer is aimed at the active content; switching is deferred.
    DelayStarted,
    /// A decisive verdict ended the delaying phase.
    DelayEnded,
    /// The item gained the active marker.
    ItemMarked(I),
    /// The item lost the active marker.
    ItemUnmarked(I),
}

/// Receives side effects from a bound menu.
///
/// All methods default to no-ops so observers implement only what they need.
pub trait MenuAimObserver<I> {
    /// An item became the active item.
    fn on_activate(&mut self, _item: &I) {}

    /// The active item was deactivated.
    fn on_deactivate(&mut self, _item: &I) {}

    /// The pointer entered the menu while no item was active.
    ///
    /// Receives the item that is active after the enter was handled.
    fn on_mouse_enter(&mut self, _active: Option<&I>) {}

    /// The pointer left the menu; receives the item about to be deactivated.
    fn on_mouse_leave(&mut self, _active: Option<&I>) {}

    /// Marker and delaying transitions.
    fn on_state_change(&mut self, _change: StateChange<I>) {}
}

/// Observer that ignores everything.
impl<I> MenuAimObserver<I> for () {}

impl<I, O: MenuAimObserver<I> + ?Sized> MenuAimObserver<I> for Box<O> {
    fn on_activate(&mut self, item: &I) {
        (**self).on_activate(item)
    }

    fn on_deactivate(&mut self, item: &I) {
        (**self).on_deactivate(item)
    }

    fn on_mouse_enter(&mut self, active: Option<&I>) {
        (**self).on_mouse_enter(active)
    }

    fn on_mouse_leave(&mut self, active: Option<&I>) {
        (**self).on_mouse_leave(active)
    }

    fn on_state_change(&mut self, change: StateChange<I>) {
        (**self).on_state_change(change)
    }
}
