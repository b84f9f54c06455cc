//! Drop area: preview (or prompt), status symbol in the top-right corner,
//! and the path/URL row underneath.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, image, row, stack, text, text_input};
use iced::{ContentFit, Element, Length};

use super::super::state::{ArtiFactual, Message};
use super::super::theme;
use super::constants::{DROP_PROMPT, SPACING, URL_PLACEHOLDER};

pub(crate) fn build_drop_area(state: &ArtiFactual) -> Element<'_, Message> {
    let height = state.config.drop_area_height;

    let body: Element<'_, Message> = match (&state.preview, &state.in_flight) {
        (Some(handle), _) => image(handle.clone())
            .content_fit(ContentFit::ScaleDown)
            .into(),
        (None, Some(request)) => text(format!("Loading {}…", request.file_name)).into(),
        (None, None) => text(DROP_PROMPT).into(),
    };

    let area = container(body)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(theme::drop_area(state.hovering));

    match status_symbol(state) {
        Some(symbol) => stack![area, symbol].into(),
        None => area.into(),
    }
}

/// Current animation frame, pinned to the top-right corner. None while hidden.
fn status_symbol(state: &ArtiFactual) -> Option<Element<'_, Message>> {
    if !state.status.is_visible() {
        return None;
    }

    let frame = state.assets.check_frames.get(state.status.frame())?;
    let size = state.config.status_size as f32;

    let symbol = image(frame.clone())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .opacity(state.status.opacity());

    Some(
        container(symbol)
            .width(Length::Fill)
            .height(Length::Fixed(state.config.drop_area_height))
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top)
            .into(),
    )
}

pub(crate) fn build_url_row(state: &ArtiFactual) -> Element<'_, Message> {
    let input = text_input(URL_PLACEHOLDER, &state.url_input)
        .on_input(Message::UrlInputChanged)
        .on_submit(Message::UrlSubmitted)
        .width(Length::Fill);

    let open_btn = if state.url_input.trim().is_empty() {
        button("Open")
    } else {
        button("Open").on_press(Message::UrlSubmitted)
    };

    row![input, open_btn].spacing(SPACING).into()
}
