mod app;
mod nav;

use app::App;

fn main() -> iced::Result {
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .window_size(iced::Size::new(
            app::MIN_WINDOW_WIDTH,
            app::MIN_WINDOW_HEIGHT,
        ))
        .run()
}
