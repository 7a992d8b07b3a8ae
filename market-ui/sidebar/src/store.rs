use std::time::Instant;

use super::config::SidebarConfig;
use super::control::{Activation, ToggleAttributes};
use super::debounce::Debouncer;
use super::event::SidebarEvent;
use super::model::{
    SIDEBAR_COLLAPSED_KEY, SIDEBAR_WIDTH_KEY, SidebarChange, Visibility,
    decode_collapsed, decode_width, encode_collapsed,
};
use super::storage::KeyValueStore;

/// Single source of truth for sidebar visibility and width.
///
/// The store owns its storage backend. Committed values are written back
/// before the mutating call returns, so storage never lags behind memory.
pub struct SidebarStore<S: KeyValueStore> {
    config: SidebarConfig,
    storage: S,
    visibility: Visibility,
    preferred_width: u32,
    debouncer: Debouncer,
}

impl<S: KeyValueStore> SidebarStore<S> {
    /// Build the store and restore persisted values from `storage`.
    ///
    /// Unreadable or malformed values fall back to the config defaults.
    pub fn new(config: SidebarConfig, storage: S) -> Self {
        let config = config.normalized();
        let collapsed = read_collapsed(&storage)
            .unwrap_or(config.default_collapsed);
        let preferred_width = read_width(&storage)
            .map(|width| config.clamp_width(width))
            .unwrap_or(config.expanded_width);
        let debouncer = Debouncer::new(config.debounce_window());

        Self {
            config,
            storage,
            visibility: Visibility::from_collapsed(collapsed),
            preferred_width,
            debouncer,
        }
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Return the committed collapse flag.
    pub fn is_collapsed(&self) -> bool {
        self.visibility.is_collapsed()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Return the rendered width: `0` while collapsed.
    pub fn width(&self) -> u32 {
        if self.is_collapsed() {
            0
        } else {
            self.preferred_width
        }
    }

    /// Return the width restored when the sidebar is expanded.
    pub fn preferred_width(&self) -> u32 {
        self.preferred_width
    }

    /// Return the collapse flag the pending burst would commit right now.
    pub fn pending_collapsed(&self) -> bool {
        if self.debouncer.pending() % 2 == 1 {
            self.visibility.flipped().is_collapsed()
        } else {
            self.is_collapsed()
        }
    }

    /// Whether toggle activations are waiting for the window to close.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Instant at which the pending burst will be committed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn snapshot(&self) -> SidebarChange {
        SidebarChange {
            collapsed: self.is_collapsed(),
            width: self.width(),
        }
    }

    /// Accessibility attributes of the toggle control for the committed
    /// state.
    pub fn toggle_attributes(&self) -> ToggleAttributes {
        ToggleAttributes::for_state(self.is_collapsed())
    }

    /// Reduce a sidebar event, returning the committed change if any.
    pub fn reduce(&mut self, event: SidebarEvent) -> Option<SidebarChange> {
        match event {
            SidebarEvent::Activated { activation, at } => {
                self.activate(&activation, at)
            },
            SidebarEvent::Tick { now } => self.tick(now),
            SidebarEvent::SetCollapsed(collapsed) => {
                self.set_collapsed(collapsed)
            },
            SidebarEvent::Resized(width) => self.set_width(width),
            SidebarEvent::Reset => self.reset(),
        }
    }

    /// Record a raw toggle activation.
    ///
    /// Activations are coalesced until the debounce window closes. A burst
    /// whose window already elapsed before `at` is committed first, so the
    /// returned change belongs to that earlier burst. With a zero window the
    /// flip is committed immediately.
    pub fn activate(
        &mut self,
        activation: &Activation,
        at: Instant,
    ) -> Option<SidebarChange> {
        if !activation.is_toggle() {
            return None;
        }

        let expired = self.tick(at);
        self.debouncer.trigger(at);
        if self.debouncer.window().is_zero() {
            return self.tick(at);
        }

        expired
    }

    /// Close the debounce window if it has elapsed.
    ///
    /// An odd number of coalesced activations commits one flip. An even
    /// number leaves the state as it was and commits nothing.
    pub fn tick(&mut self, now: Instant) -> Option<SidebarChange> {
        let coalesced = self.debouncer.poll(now)?;
        if coalesced % 2 == 0 {
            log::debug!("sidebar toggle burst of {coalesced} cancelled out");
            return None;
        }

        let next = self.visibility.flipped();
        self.commit(next, self.preferred_width)
    }

    /// Set the collapse flag directly.
    ///
    /// Pending activations are dropped: the explicit value is the latest
    /// event and wins.
    pub fn set_collapsed(&mut self, collapsed: bool) -> Option<SidebarChange> {
        self.debouncer.cancel();
        self.commit(Visibility::from_collapsed(collapsed), self.preferred_width)
    }

    /// Set the preferred expanded width, clamped to the configured bounds.
    pub fn set_width(&mut self, width: u32) -> Option<SidebarChange> {
        let width = self.config.clamp_width(width);
        self.commit(self.visibility, width)
    }

    /// Forget persisted values and return to the config defaults.
    pub fn reset(&mut self) -> Option<SidebarChange> {
        self.debouncer.cancel();
        for key in [SIDEBAR_COLLAPSED_KEY, SIDEBAR_WIDTH_KEY] {
            if let Err(err) = self.storage.remove_item(key) {
                log::warn!("sidebar state reset failed for {key}: {err}");
            }
        }

        let before = self.snapshot();
        self.visibility =
            Visibility::from_collapsed(self.config.default_collapsed);
        self.preferred_width = self.config.expanded_width;

        let after = self.snapshot();
        if after == before { None } else { Some(after) }
    }

    fn commit(
        &mut self,
        visibility: Visibility,
        preferred_width: u32,
    ) -> Option<SidebarChange> {
        let visibility_changed = visibility != self.visibility;
        let width_changed = preferred_width != self.preferred_width;
        if !visibility_changed && !width_changed {
            return None;
        }

        self.visibility = visibility;
        self.preferred_width = preferred_width;
        if visibility_changed {
            self.persist_collapsed();
        }
        if width_changed {
            self.persist_width();
        }

        let change = self.snapshot();
        log::debug!(
            "sidebar committed: collapsed={} width={}",
            change.collapsed,
            change.width
        );
        Some(change)
    }

    fn persist_collapsed(&mut self) {
        let collapsed = encode_collapsed(self.is_collapsed());
        if let Err(err) = self.storage.set_item(SIDEBAR_COLLAPSED_KEY, collapsed)
        {
            log::warn!("sidebar state save failed: {err}");
        }
    }

    fn persist_width(&mut self) {
        let width = self.preferred_width.to_string();
        if let Err(err) = self.storage.set_item(SIDEBAR_WIDTH_KEY, &width) {
            log::warn!("sidebar width save failed: {err}");
        }
    }
}

fn read_collapsed<S: KeyValueStore>(storage: &S) -> Option<bool> {
    let raw = match storage.get_item(SIDEBAR_COLLAPSED_KEY) {
        Ok(raw) => raw?,
        Err(err) => {
            log::warn!("sidebar state read failed: {err}");
            return None;
        },
    };

    let collapsed = decode_collapsed(&raw);
    if collapsed.is_none() {
        log::warn!("sidebar state ignored malformed value: {raw:?}");
    }
    collapsed
}

fn read_width<S: KeyValueStore>(storage: &S) -> Option<u32> {
    let raw = match storage.get_item(SIDEBAR_WIDTH_KEY) {
        Ok(raw) => raw?,
        Err(err) => {
            log::warn!("sidebar width read failed: {err}");
            return None;
        },
    };

    let width = decode_width(&raw);
    if width.is_none() {
        log::warn!("sidebar width ignored malformed value: {raw:?}");
    }
    width
}
