use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_EXPANDED_WIDTH: u32 = 240;
const DEFAULT_MIN_WIDTH: u32 = 180;
const DEFAULT_MAX_WIDTH: u32 = 480;
const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Tunables for the sidebar store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// State used when nothing valid is persisted.
    pub default_collapsed: bool,
    /// Expanded width used when nothing valid is persisted.
    pub expanded_width: u32,
    pub min_width: u32,
    pub max_width: u32,
    /// Debounce window for toggle activations, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            default_collapsed: false,
            expanded_width: DEFAULT_EXPANDED_WIDTH,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl SidebarConfig {
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Clamp a requested width into the configured bounds.
    pub fn clamp_width(&self, width: u32) -> u32 {
        width.clamp(self.min_width, self.max_width)
    }

    /// Return a copy with inconsistent bounds repaired.
    pub fn normalized(&self) -> Self {
        let (min_width, max_width) = if self.min_width <= self.max_width {
            (self.min_width, self.max_width)
        } else {
            (self.max_width, self.min_width)
        };

        Self {
            default_collapsed: self.default_collapsed,
            expanded_width: self.expanded_width.clamp(min_width, max_width),
            min_width,
            max_width,
            debounce_ms: self.debounce_ms,
        }
    }
}
