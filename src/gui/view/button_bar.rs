//! Bottom button bar (Copy, Exit).

use iced::widget::{button, image, row, text};
use iced::{Alignment, Element, Length};

use super::super::state::{ArtiFactual, Message};
use super::super::theme;
use super::constants::{BAR_H, BUTTON_W, ICON_SCALE, SPACING};

pub(crate) fn build_button_bar(state: &ArtiFactual) -> Element<'_, Message> {
    row![
        bar_button("Copy", state.assets.copy_icon.as_ref(), Message::CopyPressed),
        bar_button("Exit", state.assets.exit_icon.as_ref(), Message::ExitPressed),
    ]
    .spacing(SPACING)
    .height(Length::Fixed(BAR_H))
    .into()
}

/// Icon + label when the icon file exists, label only otherwise.
fn bar_button<'a>(
    label: &'a str,
    icon: Option<&image::Handle>,
    on_press: Message,
) -> Element<'a, Message> {
    let (content, width): (Element<'a, Message>, Length) = match icon {
        Some(handle) => {
            let icon_size = BAR_H * ICON_SCALE;
            (
                row![
                    image(handle.clone())
                        .width(Length::Fixed(icon_size))
                        .height(Length::Fixed(icon_size)),
                    text(label),
                ]
                .spacing(4)
                .align_y(Alignment::Center)
                .into(),
                Length::Shrink,
            )
        }
        None => (text(label).into(), Length::Fixed(BUTTON_W)),
    };

    button(content)
        .on_press(on_press)
        .width(width)
        .height(Length::Fixed(BAR_H))
        .style(theme::bar_button)
        .into()
}
