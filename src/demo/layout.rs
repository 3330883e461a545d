//! Screen layout for the demo: menu, content panel and status bar.
//!
//! The menu sits on the opposite side of the screen from where its content
//! opens, so the pointer always has to cross the menu edge facing the
//! content to reach a submenu.

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthStr;

use crate::geometry::ContentDirection;

/// Rows reserved for the status bar.
pub const STATUS_HEIGHT: u16 = 3;

/// Where everything goes on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    /// The bordered menu block
    pub menu: Rect,
    /// One rect per item, inside the menu border
    pub items: Vec<Rect>,
    /// The submenu content panel
    pub content: Rect,
    pub status: Rect,
}

/// Lay out a menu with the given item labels inside `area`.
pub fn compute(area: Rect, direction: ContentDirection, labels: &[&str]) -> MenuLayout {
    let [main, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)]).areas(area);

    match direction {
        ContentDirection::Left | ContentDirection::Right => {
            vertical_menu(main, status, direction, labels)
        }
        ContentDirection::Top | ContentDirection::Bottom => {
            horizontal_menu(main, status, direction, labels)
        }
    }
}

/// Items stacked one per row, content beside the menu.
fn vertical_menu(main: Rect, status: Rect, direction: ContentDirection, labels: &[&str]) -> MenuLayout {
    let label_width = labels.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    // border + one cell of padding each side + submenu arrow
    let width = (label_width + 6).min(main.width);
    let height = (labels.len() as u16 + 2).min(main.height);

    let (menu_x, content) = if direction == ContentDirection::Right {
        (
            main.x,
            Rect::new(main.x + width, main.y, main.width - width, main.height),
        )
    } else {
        (
            main.right() - width,
            Rect::new(main.x, main.y, main.width - width, main.height),
        )
    };
    let menu = Rect::new(menu_x, main.y, width, height);

    let inner_width = width.saturating_sub(2);
    let rows = (labels.len() as u16).min(height.saturating_sub(2));
    let items = (0..rows)
        .map(|row| Rect::new(menu.x + 1, menu.y + 1 + row, inner_width, 1))
        .collect();

    MenuLayout {
        menu,
        items,
        content,
        status,
    }
}

/// Items side by side on one row, content above or below the menu.
fn horizontal_menu(main: Rect, status: Rect, direction: ContentDirection, labels: &[&str]) -> MenuLayout {
    let height = 3.min(main.height);
    let (menu_y, content) = if direction == ContentDirection::Bottom {
        (
            main.y,
            Rect::new(main.x, main.y + height, main.width, main.height - height),
        )
    } else {
        (
            main.bottom() - height,
            Rect::new(main.x, main.y, main.width, main.height - height),
        )
    };
    let menu = Rect::new(main.x, menu_y, main.width, height);

    let mut items = Vec::with_capacity(labels.len());
    let mut x = menu.x + 1;
    let limit = menu.right().saturating_sub(1);
    for label in labels {
        let width = label.width() as u16 + 4;
        if height < 3 || x + width > limit {
            break;
        }
        items.push(Rect::new(x, menu.y + 1, width, 1));
        x += width;
    }

    MenuLayout {
        menu,
        items,
        content,
        status,
    }
}
