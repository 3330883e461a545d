//! Menu binding configuration.
//!
//! Every option is optional. Values can come from a JSON document, from the
//! builder methods, or both (load a file, then override with `with_*`).
//!
//! # Example
//!
//! ```
//! use menu_aim::config::MenuAimConfig;
//! use menu_aim::geometry::ContentDirection;
//!
//! let config = MenuAimConfig::default()
//!     .with_content_direction(ContentDirection::Bottom)
//!     .with_delay_ms(150);
//! assert_eq!(config.threshold, 50.0);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::{ContentDirection, Padding};

pub const DEFAULT_DELAY_MS: u64 = 200;
pub const DEFAULT_THRESHOLD: f64 = 50.0;
pub const DEFAULT_ITEM_SELECTOR: &str = "menu-aim__item";
pub const DEFAULT_ACTIVE_MARKER: &str = "menu-aim__item--active";
pub const DEFAULT_DELAYING_MARKER: &str = "menu-aim--delaying";

/// Options for one bound menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuAimConfig {
    /// Side on which submenu content is shown (default: right)
    pub content_direction: ContentDirection,
    /// Retry interval while delaying, in milliseconds (default: 200)
    pub delay_ms: u64,
    /// Outward corner offset (default: 50)
    pub threshold: f64,
    /// Tag an item must carry to be bound (default: "menu-aim__item")
    pub item_selector: String,
    /// Marker applied to the active item (default: "menu-aim__item--active")
    pub active_marker: String,
    /// Marker applied to the menu while delaying (default: "menu-aim--delaying")
    pub delaying_marker: String,
    /// Padding subtracted from the menu rect to get the content region
    pub padding: Padding,
}

impl Default for MenuAimConfig {
    fn default() -> Self {
        Self {
            content_direction: ContentDirection::Right,
            delay_ms: DEFAULT_DELAY_MS,
            threshold: DEFAULT_THRESHOLD,
            item_selector: DEFAULT_ITEM_SELECTOR.to_string(),
            active_marker: DEFAULT_ACTIVE_MARKER.to_string(),
            delaying_marker: DEFAULT_DELAYING_MARKER.to_string(),
            padding: Padding::default(),
        }
    }
}

impl MenuAimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse { path: None, source })?;
        Ok(config.normalized())
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded menu-aim config");
        Ok(config.normalized())
    }

    /// Replace "unset" values with defaults.
    ///
    /// A zero delay, a non-positive or non-finite threshold and empty marker
    /// names count as unset.
    pub fn normalized(mut self) -> Self {
        if self.delay_ms == 0 {
            self.delay_ms = DEFAULT_DELAY_MS;
        }
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            self.threshold = DEFAULT_THRESHOLD;
        }
        if self.item_selector.is_empty() {
            self.item_selector = DEFAULT_ITEM_SELECTOR.to_string();
        }
        if self.active_marker.is_empty() {
            self.active_marker = DEFAULT_ACTIVE_MARKER.to_string();
        }
        if self.delaying_marker.is_empty() {
            self.delaying_marker = DEFAULT_DELAYING_MARKER.to_string();
        }
        self
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn with_content_direction(mut self, direction: ContentDirection) -> Self {
        self.content_direction = direction;
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_item_selector(mut self, selector: impl Into<String>) -> Self {
        self.item_selector = selector.into();
        self
    }

    pub fn with_active_marker(mut self, marker: impl Into<String>) -> Self {
        self.active_marker = marker.into();
        self
    }

    pub fn with_delaying_marker(mut self, marker: impl Into<String>) -> Self {
        self.delaying_marker = marker.into();
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}
