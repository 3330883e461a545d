//! Menu Aim - submenu intent prediction for pointer-driven menus
//!
//! Hover-activated menus flicker when the pointer crosses sibling items on
//! its way to an open submenu. This crate watches the pointer trajectory and
//! defers switching the active item while the pointer is heading for the
//! open content.
//!
//! # Example
//!
//! ```
//! use menu_aim::adapters::mock::{ManualScheduler, RecordingObserver};
//! use menu_aim::binding::{bind, BoundItem};
//! use menu_aim::config::MenuAimConfig;
//! use menu_aim::pointer::PointerTracker;
//! use ratatui::layout::Rect;
//!
//! let tracker = PointerTracker::new();
//! let items = (0..3).map(|i| BoundItem::new(i, Rect::new(0, i, 12, 1))).collect();
//! let mut menu = bind(
//!     Rect::new(0, 0, 12, 3),
//!     items,
//!     &MenuAimConfig::default(),
//!     tracker.clone(),
//!     ManualScheduler::new(),
//!     RecordingObserver::new(),
//! );
//! menu.machine_mut().click_activate(1);
//! assert_eq!(menu.machine().active_item(), Some(&1));
//! ```

pub mod adapters;
pub mod binding;
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod geometry;
pub mod intent;
pub mod logging;
pub mod machine;
pub mod pointer;
pub mod terminal;
pub mod traits;
