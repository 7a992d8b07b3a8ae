use iced::keyboard::Key;
use iced::keyboard::key::Named;

use super::model::{SIDEBAR_REGION_ID, SIDEBAR_TOGGLE_LABEL};

/// A raw activation of the sidebar toggle control.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    Pointer,
    Key(Key),
}

impl Activation {
    /// Whether this activation should toggle the sidebar.
    ///
    /// Pointer presses always do. Keyboard presses do only for Enter and
    /// Space, matching native button activation.
    pub fn is_toggle(&self) -> bool {
        match self {
            Activation::Pointer => true,
            Activation::Key(key) => is_activation_key(key),
        }
    }
}

/// Return whether `key` activates a focused button.
pub fn is_activation_key(key: &Key) -> bool {
    match key.as_ref() {
        Key::Named(Named::Enter | Named::Space) => true,
        Key::Character(text) => text == " ",
        _ => false,
    }
}

/// Accessibility attributes exposed by the toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAttributes {
    pub expanded: bool,
    pub controls: &'static str,
    pub label: &'static str,
}

impl ToggleAttributes {
    /// Attributes for a sidebar whose committed state is `collapsed`.
    pub fn for_state(collapsed: bool) -> Self {
        Self {
            expanded: !collapsed,
            controls: SIDEBAR_REGION_ID,
            label: SIDEBAR_TOGGLE_LABEL,
        }
    }

    /// Attribute name/value pairs in ARIA form.
    pub fn aria_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("aria-expanded", self.expanded.to_string()),
            ("aria-controls", self.controls.to_string()),
            ("aria-label", self.label.to_string()),
        ]
    }
}
