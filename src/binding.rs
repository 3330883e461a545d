//! Binding a menu to terminal mouse events.
//!
//! [`bind`] computes the content region from the menu rect, keeps the items
//! that carry the configured selector tag and returns a [`MenuBinding`] that
//! turns crossterm mouse events into state machine calls:
//!
//! | terminal event | meaning | machine call |
//! |----------------|---------|--------------|
//! | move/drag onto an item | item pointer-enter | `item_enter` |
//! | move/drag from inside the menu to outside | menu pointer-leave | `request_deactivate_on_leave` |
//! | left click on an item | item click | `click_activate` |
//! | left click outside the menu | document click | `outside_click_deactivate` |
//!
//! Pointer samples are not recorded here. The event loop owns the shared
//! [`PointerTracker`] and must record every move before dispatching it to
//! the bindings, so all menus see the same trajectory.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::config::MenuAimConfig;
use crate::geometry::Region;
use crate::machine::MenuAim;
use crate::pointer::PointerTracker;
use crate::traits::{MenuAimObserver, RetryScheduler, RetryTicket};

/// An item offered for binding.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundItem<I> {
    /// Caller's identifier for the item
    pub id: I,
    /// Screen area the item occupies
    pub rect: Rect,
    /// Tags used to select which items are bound
    pub tags: Vec<String>,
}

impl<I> BoundItem<I> {
    /// An item tagged with the default selector.
    pub fn new(id: I, rect: Rect) -> Self {
        Self {
            id,
            rect,
            tags: vec![crate::config::DEFAULT_ITEM_SELECTOR.to_string()],
        }
    }

    /// An item with explicit tags.
    pub fn with_tags(id: I, rect: Rect, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id,
            rect,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, selector: &str) -> bool {
        self.tags.iter().any(|tag| tag == selector)
    }

    /// Check if a cell is within this item.
    #[inline]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.rect, column, row)
    }
}

#[inline]
fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// A menu bound to the mouse event stream.
///
/// Dropping the binding cancels any outstanding retry.
#[derive(Debug)]
pub struct MenuBinding<I, S, O> {
    menu_rect: Rect,
    items: Vec<BoundItem<I>>,
    machine: MenuAim<I, S, O>,
    hovered: Option<usize>,
    pointer_inside: bool,
}

/// Bind a menu occupying `menu_rect` with the given candidate items.
///
/// Only items tagged with `config.item_selector` are bound. With no matching
/// items the binding is inert: nothing can ever be activated.
pub fn bind<I, S, O>(
    menu_rect: Rect,
    items: Vec<BoundItem<I>>,
    config: &MenuAimConfig,
    tracker: PointerTracker,
    scheduler: S,
    observer: O,
) -> MenuBinding<I, S, O>
where
    I: Clone + PartialEq + std::fmt::Debug,
    S: RetryScheduler,
    O: MenuAimObserver<I>,
{
    let offered = items.len();
    let items: Vec<_> = items
        .into_iter()
        .filter(|item| item.matches(&config.item_selector))
        .collect();
    if items.is_empty() {
        tracing::warn!(
            selector = %config.item_selector,
            offered,
            "no menu items matched the selector; menu will never activate"
        );
    }

    let region = Region::from_rect(menu_rect, config.padding);
    let machine = MenuAim::new(region, config, tracker, scheduler, observer);
    tracing::info!(instance = %machine.id(), items = items.len(), ?region, "menu bound");

    MenuBinding {
        menu_rect,
        items,
        machine,
        hovered: None,
        pointer_inside: false,
    }
}

impl<I, S, O> MenuBinding<I, S, O>
where
    I: Clone + PartialEq + std::fmt::Debug,
    S: RetryScheduler,
    O: MenuAimObserver<I>,
{
    pub fn menu_rect(&self) -> Rect {
        self.menu_rect
    }

    pub fn items(&self) -> &[BoundItem<I>] {
        &self.items
    }

    pub fn machine(&self) -> &MenuAim<I, S, O> {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut MenuAim<I, S, O> {
        &mut self.machine
    }

    /// Index of the item under the pointer, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_bound(&self) -> bool {
        self.machine.is_bound()
    }

    /// Find the item at a cell. Later items win where rects overlap.
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        self.items.iter().rposition(|item| item.contains(column, row))
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.menu_rect, column, row)
    }

    /// Dispatch a mouse event.
    ///
    /// Returns `true` if the event may have changed menu state.
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> bool {
        if !self.machine.is_bound() {
            return false;
        }
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.handle_move(event.column, event.row)
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(event.column, event.row),
            _ => false,
        }
    }

    /// Forward a delivered retry ticket.
    pub fn on_retry(&mut self, ticket: RetryTicket) -> bool {
        self.machine.on_retry(ticket)
    }

    /// Detach from the event stream and cancel any outstanding retry.
    ///
    /// Calling this more than once is a no-op.
    pub fn unbind(&mut self) {
        if self.machine.unbind() {
            self.hovered = None;
            self.pointer_inside = false;
        }
    }

    fn handle_move(&mut self, column: u16, row: u16) -> bool {
        let inside = self.contains(column, row);
        let hovered = self.item_at(column, row);
        let mut changed = false;

        if hovered != self.hovered {
            self.hovered = hovered;
            if let Some(index) = hovered {
                let id = self.items[index].id.clone();
                self.machine.item_enter(id);
            }
            changed = true;
        }

        if self.pointer_inside && !inside {
            self.machine.request_deactivate_on_leave();
            changed = true;
        }
        self.pointer_inside = inside;
        changed
    }

    fn handle_click(&mut self, column: u16, row: u16) -> bool {
        if let Some(index) = self.item_at(column, row) {
            let id = self.items[index].id.clone();
            self.machine.click_activate(id);
            return true;
        }
        let inside = self.contains(column, row);
        self.machine.outside_click_deactivate(inside);
        !inside
    }
}
