/// Storage key holding the committed collapse flag (`"true"` / `"false"`).
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";
/// Storage key holding the preferred expanded width in pixels.
pub const SIDEBAR_WIDTH_KEY: &str = "sidebarWidth";

/// Identifier of the region the toggle control expands and collapses.
pub const SIDEBAR_REGION_ID: &str = "main-sidebar";
/// Accessible label of the toggle control.
pub const SIDEBAR_TOGGLE_LABEL: &str = "Toggle sidebar";

/// The two visibility states of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Expanded,
    Collapsed,
}

impl Visibility {
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            Visibility::Collapsed
        } else {
            Visibility::Expanded
        }
    }

    pub fn is_collapsed(self) -> bool {
        matches!(self, Visibility::Collapsed)
    }

    /// Return the opposite state.
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Expanded => Visibility::Collapsed,
            Visibility::Collapsed => Visibility::Expanded,
        }
    }
}

/// Committed sidebar values handed to layout consumers.
///
/// `width` is already derived: it is `0` while collapsed and the preferred
/// expanded width otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarChange {
    pub collapsed: bool,
    pub width: u32,
}

/// Encode a collapse flag the way it is persisted.
pub(crate) fn encode_collapsed(collapsed: bool) -> &'static str {
    if collapsed { "true" } else { "false" }
}

/// Decode a persisted collapse flag. Only the exact encodings are accepted.
pub(crate) fn decode_collapsed(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Decode a persisted width in whole pixels.
///
/// Fractional values written by older clients are rounded; negative or
/// non-finite values are rejected.
pub(crate) fn decode_width(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<u32>() {
        return Some(value);
    }

    let value = raw.parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }

    Some(value.round() as u32)
}
