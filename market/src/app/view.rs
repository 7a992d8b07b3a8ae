use iced::widget::{Space, button, column, container, row, text, tooltip};
use iced::{Border, Color, Element, Length, alignment};
use market_ui_sidebar::SidebarEvent;

use super::{App, Event};
use crate::nav::{NAV_ITEMS, NavItem};

const RAIL_WIDTH: f32 = 48.0;
const RAIL_BUTTON_SIZE: f32 = 40.0;
const NAV_BUTTON_HEIGHT: f32 = 36.0;
const NAV_PADDING: f32 = 8.0;
const FOCUS_BORDER_WIDTH: f32 = 2.0;
const RESIZE_STEP: u32 = 40;

pub(super) fn view(app: &App) -> Element<'_, Event> {
    let rail = view_rail(app);
    let sidebar_width = app.sidebar.width();

    let layout = if sidebar_width == 0 {
        row![rail, view_content(app)]
    } else {
        row![rail, view_sidebar(app, sidebar_width), view_content(app)]
    };

    layout.width(Length::Fill).height(Length::Fill).into()
}

fn view_rail(app: &App) -> Element<'_, Event> {
    let attributes = app.sidebar.toggle_attributes();
    let glyph = if app.sidebar.pending_collapsed() {
        "»"
    } else {
        "«"
    };
    let focused = app.toggle_focused;

    let toggle = button(
        container(text(glyph))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(Event::TogglePressed)
    .padding(0)
    .width(Length::Fixed(RAIL_BUTTON_SIZE))
    .height(Length::Fixed(RAIL_BUTTON_SIZE))
    .style(move |theme: &iced::Theme, _| {
        let palette = theme.extended_palette();
        let border_color = if focused {
            palette.primary.strong.color
        } else {
            Color::TRANSPARENT
        };
        iced::widget::button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border {
                color: border_color,
                width: FOCUS_BORDER_WIDTH,
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    });

    let toggle = tooltip(
        toggle,
        text(attributes.label),
        tooltip::Position::Right,
    );

    container(column![toggle, Space::new().height(Length::Fill)])
        .width(Length::Fixed(RAIL_WIDTH))
        .height(Length::Fill)
        .padding(4)
        .into()
}

fn view_sidebar(app: &App, width: u32) -> Element<'_, Event> {
    let entries = NAV_ITEMS
        .into_iter()
        .map(|item| view_nav_entry(item, item.is_active(&app.location)));

    let narrower = width.saturating_sub(RESIZE_STEP);
    let wider = width.saturating_add(RESIZE_STEP);
    let footer = row![
        footer_button("-", SidebarEvent::Resized(narrower)),
        footer_button("+", SidebarEvent::Resized(wider)),
        footer_button("Hide", SidebarEvent::SetCollapsed(true)),
        footer_button("Reset", SidebarEvent::Reset),
    ]
    .spacing(4);

    let nav = column(entries).spacing(2).width(Length::Fill);

    container(column![nav, Space::new().height(Length::Fill), footer])
        .width(Length::Fixed(width as f32))
        .height(Length::Fill)
        .padding(NAV_PADDING)
        .style(|theme: &iced::Theme| {
            let palette = theme.extended_palette();
            iced::widget::container::Style {
                background: Some(palette.background.weak.color.into()),
                ..Default::default()
            }
        })
        .into()
}

fn view_nav_entry<'a>(item: NavItem, is_active: bool) -> Element<'a, Event> {
    button(text(item.title()))
        .on_press(Event::Navigate(item))
        .width(Length::Fill)
        .height(Length::Fixed(NAV_BUTTON_HEIGHT))
        .style(move |theme: &iced::Theme, _| {
            let palette = theme.extended_palette();
            let (background, text_color) = if is_active {
                (
                    Some(palette.primary.weak.color.into()),
                    palette.primary.weak.text,
                )
            } else {
                (None, palette.background.weak.text)
            };
            iced::widget::button::Style {
                background,
                text_color,
                border: Border::default(),
                ..Default::default()
            }
        })
        .into()
}

fn footer_button<'a>(
    label: &'a str,
    event: SidebarEvent,
) -> Element<'a, Event> {
    button(text(label))
        .on_press(Event::Sidebar(event))
        .padding([2, 8])
        .into()
}

fn view_content(app: &App) -> Element<'_, Event> {
    container(text(app.location.pathname()).size(20))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .into()
}
