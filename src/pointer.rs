//! Pointer trajectory sampling.
//!
//! A [`PointerTracker`] keeps the last two pointer positions seen anywhere on
//! screen. One tracker is owned by the event loop and a clone of it is handed
//! to every bound menu, so all menus read the same trajectory while only the
//! event loop writes to it.

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::geometry::Point;

/// Rolling two-slot buffer of pointer samples.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SampleBuffer {
    pub previous: Option<Point>,
    pub current: Option<Point>,
}

impl SampleBuffer {
    /// Shift `current` into `previous` and record `point` as the new current.
    pub fn push(&mut self, point: Point) {
        self.previous = self.current;
        self.current = Some(point);
    }

    /// Both samples, once two moves have been observed.
    pub fn pair(&self) -> Option<(Point, Point)> {
        Some((self.previous?, self.current?))
    }
}

/// Shared handle to the process-wide pointer samples.
///
/// Cloning is cheap and every clone observes the same buffer. The tracker is
/// deliberately `!Send`: all mutation happens on the single event-loop thread.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    buffer: Rc<Cell<SampleBuffer>>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer movement.
    pub fn record_sample(&self, point: Point) {
        let mut buffer = self.buffer.get();
        buffer.push(point);
        self.buffer.set(buffer);
        tracing::trace!(x = point.x, y = point.y, "pointer sample");
    }

    /// Record a movement to a terminal cell.
    pub fn record_cell(&self, column: u16, row: u16) {
        self.record_sample(Point::from_cell(column, row));
    }

    /// Record the pointer position of a move or drag event.
    ///
    /// Returns `true` if the event was a movement and a sample was taken.
    pub fn observe_mouse(&self, event: &MouseEvent) -> bool {
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.record_cell(event.column, event.row);
                true
            }
            _ => false,
        }
    }

    /// Snapshot of the current samples.
    pub fn samples(&self) -> SampleBuffer {
        self.buffer.get()
    }

    pub fn current(&self) -> Option<Point> {
        self.buffer.get().current
    }
}
