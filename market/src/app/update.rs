use std::time::Instant;

use iced::Task;
use iced::keyboard::Key;
use iced::keyboard::key::Named;
use market_ui_route::Location;
use market_ui_sidebar::{Activation, SidebarEvent, is_activation_key};

use super::{App, Event};

pub(super) fn update(app: &mut App, event: Event) -> Task<Event> {
    match event {
        Event::TogglePressed => {
            app.toggle_focused = true;
            reduce_sidebar(
                app,
                SidebarEvent::Activated {
                    activation: Activation::Pointer,
                    at: Instant::now(),
                },
            )
        },
        Event::SidebarTick => reduce_sidebar(
            app,
            SidebarEvent::Tick {
                now: Instant::now(),
            },
        ),
        Event::Sidebar(event) => reduce_sidebar(app, event),
        Event::Navigate(item) => {
            app.toggle_focused = false;
            app.location = Location::parse(&item.href());
            Task::none()
        },
        Event::Keyboard(event) => handle_keyboard(app, event),
    }
}

fn reduce_sidebar(app: &mut App, event: SidebarEvent) -> Task<Event> {
    if let Some(change) = app.sidebar.reduce(event) {
        log::debug!(
            "sidebar layout reflow: collapsed={} width={}",
            change.collapsed,
            change.width
        );
    }
    Task::none()
}

fn handle_keyboard(app: &mut App, event: iced::keyboard::Event) -> Task<Event> {
    match event {
        iced::keyboard::Event::KeyPressed { key, repeat, .. } => {
            handle_key_pressed(app, key, repeat)
        },
        _ => Task::none(),
    }
}

/// Route a key press: Tab moves focus onto the toggle control, Escape
/// clears it, and Enter or Space activate the focused control. Auto-repeat
/// of a held key is not a new activation.
fn handle_key_pressed(app: &mut App, key: Key, repeat: bool) -> Task<Event> {
    match key {
        Key::Named(Named::Tab) => {
            app.toggle_focused = !app.toggle_focused;
            Task::none()
        },
        Key::Named(Named::Escape) => {
            app.toggle_focused = false;
            Task::none()
        },
        key if app.toggle_focused && !repeat && is_activation_key(&key) => {
            reduce_sidebar(
                app,
                SidebarEvent::Activated {
                    activation: Activation::Key(key),
                    at: Instant::now(),
                },
            )
        },
        _ => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use iced::keyboard::Key;
    use iced::keyboard::key::Named;
    use market_ui_route::Location;
    use market_ui_sidebar::{
        KeyValueStore, MemoryStore, SIDEBAR_COLLAPSED_KEY, SidebarConfig,
        SidebarEvent,
    };

    use super::{handle_key_pressed, update};
    use crate::app::config::AppConfig;
    use crate::app::{App, Event};
    use crate::nav::NavItem;

    fn test_app() -> App {
        let config = AppConfig {
            sidebar: SidebarConfig {
                debounce_ms: 0,
                ..SidebarConfig::default()
            },
        };
        App::from_parts(
            config,
            Box::new(MemoryStore::with_entries([(
                SIDEBAR_COLLAPSED_KEY,
                "true",
            )])),
        )
    }

    #[test]
    fn given_toggle_press_when_updated_then_sidebar_expands_and_gains_focus() {
        let mut app = test_app();

        let _task = update(&mut app, Event::TogglePressed);

        assert!(!app.sidebar.is_collapsed());
        assert!(app.toggle_focused);
    }

    #[test]
    fn given_focused_toggle_when_enter_then_space_pressed_then_state_toggles_back()
     {
        let mut app = test_app();
        app.toggle_focused = true;

        let _task =
            handle_key_pressed(&mut app, Key::Named(Named::Enter), false);
        assert!(!app.sidebar.is_collapsed());

        let _task =
            handle_key_pressed(&mut app, Key::Named(Named::Space), false);
        assert!(app.sidebar.is_collapsed());
    }

    #[test]
    fn given_held_enter_when_repeats_arrive_then_only_first_press_activates() {
        let mut app = test_app();
        app.toggle_focused = true;

        let _task =
            handle_key_pressed(&mut app, Key::Named(Named::Enter), false);
        for _ in 0..5 {
            let _task =
                handle_key_pressed(&mut app, Key::Named(Named::Enter), true);
        }

        assert!(!app.sidebar.is_collapsed());
        assert!(!app.sidebar.is_pending());
    }

    #[test]
    fn given_unfocused_toggle_when_enter_pressed_then_nothing_changes() {
        let mut app = test_app();

        let _task =
            handle_key_pressed(&mut app, Key::Named(Named::Enter), false);

        assert!(app.sidebar.is_collapsed());
    }

    #[test]
    fn given_tab_and_escape_when_pressed_then_focus_moves_and_clears() {
        let mut app = test_app();

        let _task =
            handle_key_pressed(&mut app, Key::Named(Named::Tab), false);
        assert!(app.toggle_focused);

        let _task =
            handle_key_pressed(&mut app, Key::Named(Named::Escape), false);
        assert!(!app.toggle_focused);
    }

    #[test]
    fn given_hide_and_reset_actions_when_updated_then_store_follows_them() {
        let mut app = test_app();
        let _task = update(&mut app, Event::TogglePressed);
        assert!(!app.sidebar.is_collapsed());

        let _task =
            update(&mut app, Event::Sidebar(SidebarEvent::SetCollapsed(true)));
        assert!(app.sidebar.is_collapsed());
        assert_eq!(
            app.sidebar
                .storage()
                .get_item(SIDEBAR_COLLAPSED_KEY)
                .expect("memory read")
                .as_deref(),
            Some("true")
        );

        let _task = update(&mut app, Event::Sidebar(SidebarEvent::Reset));
        assert!(!app.sidebar.is_collapsed());
        assert_eq!(
            app.sidebar
                .storage()
                .get_item(SIDEBAR_COLLAPSED_KEY)
                .expect("memory read"),
            None
        );
    }

    #[test]
    fn given_nav_item_when_navigated_then_location_uses_resolved_href() {
        let mut app = test_app();

        let _task = update(&mut app, Event::Navigate(NavItem::Schedule));

        assert_eq!(app.location, Location::parse("/profile?section=calendar"));
        assert!(NavItem::Schedule.is_active(&app.location));
    }

    #[test]
    fn given_debounced_config_when_ticked_after_window_then_flip_commits() {
        let mut app = App::from_parts(
            AppConfig::default(),
            Box::new(MemoryStore::new()),
        );
        let start = Instant::now();

        let _task = update(
            &mut app,
            Event::Sidebar(SidebarEvent::Activated {
                activation: market_ui_sidebar::Activation::Pointer,
                at: start,
            }),
        );
        assert!(app.sidebar.is_pending());

        let _task = update(
            &mut app,
            Event::Sidebar(SidebarEvent::Tick {
                now: start + Duration::from_millis(200),
            }),
        );
        assert!(app.sidebar.is_collapsed());
    }
}
