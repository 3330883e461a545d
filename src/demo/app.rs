//! Demo application state.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::layout::Rect;

use crate::adapters::{CallbackObserver, MarkerBoard};
use crate::binding::{bind, BoundItem, MenuBinding};
use crate::config::MenuAimConfig;
use crate::pointer::PointerTracker;
use crate::traits::{RetryScheduler, RetryTicket};

use super::layout::{self, MenuLayout};

/// Number of activity lines kept for the status bar.
pub const MAX_ACTIVITY: usize = 4;

/// A top-level menu entry and its submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub children: &'static [&'static str],
}

pub const MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry {
        label: "File",
        children: &["New", "Open...", "Open Recent", "Save", "Save As...", "Close"],
    },
    MenuEntry {
        label: "Edit",
        children: &["Undo", "Redo", "Cut", "Copy", "Paste", "Find..."],
    },
    MenuEntry {
        label: "Selection",
        children: &["Select All", "Expand", "Shrink", "Add Cursor Above"],
    },
    MenuEntry {
        label: "View",
        children: &["Command Palette", "Explorer", "Search", "Terminal"],
    },
    MenuEntry {
        label: "Go",
        children: &["Back", "Forward", "Go to File...", "Go to Line..."],
    },
    MenuEntry {
        label: "Help",
        children: &["Welcome", "Documentation", "About"],
    },
];

/// Markers for rendering plus a callback feeding the activity log.
pub type DemoObserver = (MarkerBoard<usize>, CallbackObserver<usize>);

pub type DemoBinding<S> = MenuBinding<usize, S, DemoObserver>;

/// State of the running demo.
///
/// The menu is rebound whenever the terminal size changes, since the
/// content region is fixed for the lifetime of a binding.
pub struct DemoApp<S> {
    config: MenuAimConfig,
    tracker: PointerTracker,
    scheduler: S,
    area: Option<Rect>,
    layout: Option<MenuLayout>,
    binding: Option<DemoBinding<S>>,
    activity: Rc<RefCell<VecDeque<String>>>,
    /// Set when the next loop iteration must redraw
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl<S: RetryScheduler + Clone> DemoApp<S> {
    pub fn new(config: MenuAimConfig, tracker: PointerTracker, scheduler: S) -> Self {
        Self {
            config,
            tracker,
            scheduler,
            area: None,
            layout: None,
            binding: None,
            activity: Rc::new(RefCell::new(VecDeque::with_capacity(MAX_ACTIVITY))),
            needs_redraw: true,
            should_quit: false,
        }
    }

    pub fn config(&self) -> &MenuAimConfig {
        &self.config
    }

    pub fn layout(&self) -> Option<&MenuLayout> {
        self.layout.as_ref()
    }

    pub fn binding(&self) -> Option<&DemoBinding<S>> {
        self.binding.as_ref()
    }

    pub fn entries(&self) -> &'static [MenuEntry] {
        MENU_ENTRIES
    }

    /// Most recent activity, oldest first.
    pub fn activity(&self) -> Vec<String> {
        self.activity.borrow().iter().cloned().collect()
    }

    /// Lay out and bind the menu for `area`. No-op if the size is unchanged.
    pub fn resize(&mut self, area: Rect) {
        if self.area == Some(area) {
            return;
        }
        self.area = Some(area);

        if let Some(mut old) = self.binding.take() {
            old.unbind();
        }

        let labels: Vec<&str> = MENU_ENTRIES.iter().map(|entry| entry.label).collect();
        let layout = layout::compute(area, self.config.content_direction, &labels);
        let items = layout
            .items
            .iter()
            .enumerate()
            .map(|(index, rect)| {
                BoundItem::with_tags(index, *rect, [self.config.item_selector.clone()])
            })
            .collect();

        let binding = bind(
            layout.menu,
            items,
            &self.config,
            self.tracker.clone(),
            self.scheduler.clone(),
            (MarkerBoard::from_config(&self.config), self.activity_observer()),
        );
        tracing::debug!(?area, menu = ?layout.menu, "menu laid out");

        self.layout = Some(layout);
        self.binding = Some(binding);
        self.needs_redraw = true;
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(&mouse),
            Event::Key(key) => self.handle_key(key),
            Event::Resize(..) => self.needs_redraw = true,
            _ => {}
        }
    }

    /// Record the pointer sample, then dispatch to the menu.
    pub fn handle_mouse(&mut self, event: &MouseEvent) {
        self.tracker.observe_mouse(event);
        if let Some(binding) = self.binding.as_mut() {
            let delaying = binding.machine().is_delaying();
            let changed = binding.handle_mouse(event);
            self.needs_redraw |= changed || delaying != binding.machine().is_delaying();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
        }
    }

    /// Deliver a fired retry to the menu.
    pub fn on_retry(&mut self, ticket: RetryTicket) {
        if let Some(binding) = self.binding.as_mut() {
            self.needs_redraw |= binding.on_retry(ticket);
        }
    }

    /// Index of the entry whose submenu is open.
    pub fn active_entry(&self) -> Option<usize> {
        self.binding
            .as_ref()
            .and_then(|binding| binding.machine().active_item().copied())
    }

    pub fn hovered_entry(&self) -> Option<usize> {
        self.binding.as_ref().and_then(|binding| binding.hovered())
    }

    pub fn is_entry_active(&self, index: usize) -> bool {
        self.binding
            .as_ref()
            .is_some_and(|binding| binding.machine().observer().0.is_item_active(&index))
    }

    pub fn is_delaying(&self) -> bool {
        self.binding
            .as_ref()
            .is_some_and(|binding| binding.machine().observer().0.is_delaying())
    }

    fn activity_observer(&self) -> CallbackObserver<usize> {
        let push = {
            let log = self.activity.clone();
            move |line: String| {
                let mut log = log.borrow_mut();
                if log.len() == MAX_ACTIVITY {
                    log.pop_front();
                }
                log.push_back(line);
            }
        };
        let on_open = push.clone();
        let on_close = push;
        CallbackObserver::new()
            .with_activate(move |index: &usize| on_open(format!("open {}", entry_label(*index))))
            .with_deactivate(move |index: &usize| on_close(format!("close {}", entry_label(*index))))
    }
}

fn entry_label(index: usize) -> &'static str {
    MENU_ENTRIES.get(index).map_or("?", |entry| entry.label)
}
