use std::time::Instant;

use super::control::Activation;

/// Events routed into the sidebar store.
#[derive(Debug, Clone)]
pub enum SidebarEvent {
    /// Raw activation of the toggle control (click, Enter or Space).
    Activated { activation: Activation, at: Instant },
    /// Timer tick used to close a pending debounce window.
    Tick { now: Instant },
    /// Explicit state assignment bypassing the debounce.
    SetCollapsed(bool),
    /// Preferred expanded width requested by a resize handle.
    Resized(u32),
    /// Drop persisted values and return to the configured defaults.
    Reset,
}
