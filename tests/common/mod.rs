//! Common test utilities for integration tests.
//!
//! Provides a bound menu wired to hand-cranked retries and a recording
//! observer, plus helpers that feed mouse events the way the event loop does
//! (sample first, then dispatch).
//!
//! # Example
//!
//! ```ignore
//! use common::MenuFixture;
//!
//! let mut menu = MenuFixture::new();
//! menu.click(10, 15);
//! assert_eq!(menu.active(), Some(1));
//! ```

#![allow(dead_code)]

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use menu_aim::adapters::mock::{ManualScheduler, RecordingObserver};
use menu_aim::binding::{bind, BoundItem, MenuBinding};
use menu_aim::config::MenuAimConfig;
use menu_aim::geometry::ContentDirection;
use menu_aim::pointer::PointerTracker;
use ratatui::layout::Rect;

pub type TestBinding = MenuBinding<usize, ManualScheduler, RecordingObserver<usize>>;

/// Menu occupying (0,0)-(100,50) with five items ten rows tall each.
pub const MENU_RECT: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 50,
};

pub const ITEM_COUNT: u16 = 5;
pub const ITEM_HEIGHT: u16 = 10;

/// Config with no corner slack and content on the right.
pub fn test_config() -> MenuAimConfig {
    MenuAimConfig::default()
        .with_content_direction(ContentDirection::Right)
        .with_threshold(0.0)
}

pub fn test_items() -> Vec<BoundItem<usize>> {
    (0..ITEM_COUNT)
        .map(|i| BoundItem::new(i as usize, Rect::new(0, i * ITEM_HEIGHT, 100, ITEM_HEIGHT)))
        .collect()
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// A bound menu plus handles on its collaborators.
pub struct MenuFixture {
    pub binding: TestBinding,
    pub tracker: PointerTracker,
    pub scheduler: ManualScheduler,
    pub observer: RecordingObserver<usize>,
}

impl MenuFixture {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: MenuAimConfig) -> Self {
        let tracker = PointerTracker::new();
        let scheduler = ManualScheduler::new();
        let observer = RecordingObserver::new();
        let binding = bind(
            MENU_RECT,
            test_items(),
            &config,
            tracker.clone(),
            scheduler.clone(),
            observer.clone(),
        );
        Self {
            binding,
            tracker,
            scheduler,
            observer,
        }
    }

    /// Record the sample, then dispatch.
    pub fn move_to(&mut self, column: u16, row: u16) {
        let event = mouse(MouseEventKind::Moved, column, row);
        self.tracker.observe_mouse(&event);
        self.binding.handle_mouse(&event);
    }

    pub fn click(&mut self, column: u16, row: u16) {
        self.binding
            .handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), column, row));
    }

    /// Fire every live retry and deliver the tickets. Returns how many were accepted.
    pub fn fire_retries(&mut self) -> usize {
        self.scheduler
            .fire_all()
            .into_iter()
            .filter(|ticket| self.binding.on_retry(*ticket))
            .count()
    }

    pub fn active(&self) -> Option<usize> {
        self.binding.machine().active_item().copied()
    }

    pub fn is_delaying(&self) -> bool {
        self.binding.machine().is_delaying()
    }
}
