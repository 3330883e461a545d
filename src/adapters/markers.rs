//! Marker names for renderers.
//!
//! A [`MarkerBoard`] listens to state changes and keeps the set of marker
//! names currently applied to the menu root and to each item, the same names
//! a stylesheet-driven menu would toggle. Renderers query it when drawing.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use crate::config::MenuAimConfig;
use crate::traits::{MenuAimObserver, StateChange};

#[derive(Debug, Clone)]
pub struct MarkerBoard<I> {
    active_marker: String,
    delaying_marker: String,
    root: BTreeSet<String>,
    items: HashMap<I, BTreeSet<String>>,
}

impl<I: Eq + Hash + Clone> MarkerBoard<I> {
    pub fn new(active_marker: impl Into<String>, delaying_marker: impl Into<String>) -> Self {
        Self {
            active_marker: active_marker.into(),
            delaying_marker: delaying_marker.into(),
            root: BTreeSet::new(),
            items: HashMap::new(),
        }
    }

    pub fn from_config(config: &MenuAimConfig) -> Self {
        Self::new(config.active_marker.clone(), config.delaying_marker.clone())
    }

    pub fn root_markers(&self) -> &BTreeSet<String> {
        &self.root
    }

    pub fn item_markers(&self, item: &I) -> Option<&BTreeSet<String>> {
        self.items.get(item).filter(|set| !set.is_empty())
    }

    pub fn item_has(&self, item: &I, marker: &str) -> bool {
        self.items.get(item).is_some_and(|set| set.contains(marker))
    }

    pub fn is_item_active(&self, item: &I) -> bool {
        self.item_has(item, &self.active_marker)
    }

    pub fn is_delaying(&self) -> bool {
        self.root.contains(&self.delaying_marker)
    }
}

impl<I: Eq + Hash + Clone> MenuAimObserver<I> for MarkerBoard<I> {
    fn on_state_change(&mut self, change: StateChange<I>) {
        match change {
            StateChange::DelayStarted => {
                self.root.insert(self.delaying_marker.clone());
            }
            StateChange::DelayEnded => {
                self.root.remove(&self.delaying_marker);
            }
            StateChange::ItemMarked(item) => {
                self.items
                    .entry(item)
                    .or_default()
                    .insert(self.active_marker.clone());
            }
            StateChange::ItemUnmarked(item) => {
                if let Some(set) = self.items.get_mut(&item) {
                    set.remove(&self.active_marker);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_follow_state_changes() {
        let mut board = MarkerBoard::from_config(&MenuAimConfig::default());
        board.on_state_change(StateChange::ItemMarked(2));
        board.on_state_change(StateChange::DelayStarted);

        assert!(board.is_item_active(&2));
        assert!(board.item_has(&2, "menu-aim__item--active"));
        assert!(board.is_delaying());
        assert!(board.root_markers().contains("menu-aim--delaying"));

        board.on_state_change(StateChange::ItemUnmarked(2));
        board.on_state_change(StateChange::DelayEnded);
        assert!(!board.is_item_active(&2));
        assert!(board.item_markers(&2).is_none());
        assert!(!board.is_delaying());
    }

    #[test]
    fn test_custom_marker_names() {
        let mut board = MarkerBoard::new("open", "waiting");
        board.on_state_change(StateChange::ItemMarked("file"));
        assert!(board.item_has(&"file", "open"));
        assert!(!board.item_has(&"file", "menu-aim__item--active"));
    }
}
