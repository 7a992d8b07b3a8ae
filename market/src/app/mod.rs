mod config;
mod subscription;
mod update;
mod view;

use iced::{Element, Subscription, Task};
use market_ui_route::Location;
use market_ui_sidebar::{
    JsonFileStore, KeyValueStore, MemoryStore, SidebarEvent, SidebarStore,
    StoreLoadStatus,
};

use crate::nav::{HOME_PATH, NavItem};
use config::AppConfig;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 960.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum Event {
    TogglePressed,
    SidebarTick,
    Sidebar(SidebarEvent),
    Navigate(NavItem),
    Keyboard(iced::keyboard::Event),
}

pub(crate) struct App {
    sidebar: SidebarStore<Box<dyn KeyValueStore>>,
    location: Location,
    toggle_focused: bool,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let app = App::from_parts(AppConfig::load(), open_storage());
        (app, Task::none())
    }

    fn from_parts(config: AppConfig, storage: Box<dyn KeyValueStore>) -> Self {
        App {
            sidebar: SidebarStore::new(config.sidebar, storage),
            location: Location::parse(HOME_PATH),
            toggle_focused: false,
        }
    }

    pub(crate) fn title(&self) -> String {
        String::from("Market")
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, Event> {
        view::view(self)
    }

    pub(crate) fn subscription(&self) -> Subscription<Event> {
        subscription::subscription(self)
    }
}

/// Open the persisted store, keeping state in memory when it is unusable.
fn open_storage() -> Box<dyn KeyValueStore> {
    match JsonFileStore::open_default() {
        Ok(store) => {
            if let StoreLoadStatus::Invalid(message) = store.load_status() {
                log::warn!(
                    "local storage at {} was reset: {message}",
                    store.path().display()
                );
            }
            Box::new(store)
        },
        Err(err) => {
            log::warn!("local storage unavailable, using memory: {err}");
            Box::new(MemoryStore::new())
        },
    }
}
