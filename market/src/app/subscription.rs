use std::time::Duration;

use iced::Subscription;

use super::{App, Event};

/// Tick interval used to close a pending toggle debounce window.
const SIDEBAR_TICK_MS: u64 = 50;

pub(super) fn subscription(app: &App) -> Subscription<Event> {
    let key_subs = iced::keyboard::listen().map(Event::Keyboard);

    let mut subs = vec![key_subs];
    if app.sidebar.is_pending() {
        subs.push(
            iced::time::every(Duration::from_millis(SIDEBAR_TICK_MS))
                .map(|_| Event::SidebarTick),
        );
    }

    Subscription::batch(subs)
}
