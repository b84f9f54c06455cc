//! gui/theme.rs
//! Dark palette + the few widget styles that differ from the theme defaults.

use iced::widget::{button, container, text_editor};
use iced::{Background, Border, Color, Theme};

use crate::core::config::ThemeChoice;

use super::state::ArtiFactual;

const WINDOW: Color = Color::from_rgb8(53, 53, 53);
const BASE: Color = Color::from_rgb8(25, 25, 25);
const HIGHLIGHT: Color = Color::from_rgb8(42, 130, 218);
const SUCCESS: Color = Color::from_rgb8(0, 210, 53);
const BAR_BUTTON: Color = Color::from_rgb8(0x2d, 0x2d, 0x2d);
const DROP_BORDER: Color = Color::from_rgb8(0xaa, 0xaa, 0xaa);

pub(crate) fn theme(state: &ArtiFactual) -> Theme {
    match state.config.theme {
        ThemeChoice::Dark => dark(),
        ThemeChoice::Light => Theme::Light,
    }
}

pub(crate) fn dark() -> Theme {
    let mut palette = Theme::Dark.palette();
    palette.background = WINDOW;
    palette.text = Color::WHITE;
    palette.primary = HIGHLIGHT;
    palette.success = SUCCESS;
    palette.danger = Color::from_rgb8(255, 0, 0);

    Theme::custom("ArtiFactual Dark".to_string(), palette)
}

/// Drop area frame: grey normally, highlight colour while a supported file hovers.
pub(crate) fn drop_area(hovering: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        border: Border {
            color: if hovering { HIGHLIGHT } else { DROP_BORDER },
            width: 2.0,
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub(crate) fn bar_button(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = button::secondary(theme, status);
    style.background = Some(Background::Color(match status {
        button::Status::Hovered => Color::from_rgb8(0x3a, 0x3a, 0x3a),
        _ => BAR_BUTTON,
    }));
    style.text_color = Color::WHITE;
    style
}

pub(crate) fn text_pane(theme: &Theme, status: text_editor::Status) -> text_editor::Style {
    let mut style = text_editor::default(theme, status);
    if theme.palette().background == WINDOW {
        style.background = Background::Color(BASE);
    }
    style
}
