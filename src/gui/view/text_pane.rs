//! Editable text pane holding the latest result.

use iced::widget::text_editor;
use iced::{Element, Length};

use super::super::state::{ArtiFactual, Message};
use super::super::theme;
use super::constants::TEXT_PLACEHOLDER;

pub(crate) fn build_text_pane(state: &ArtiFactual) -> Element<'_, Message> {
    text_editor(&state.text)
        .placeholder(TEXT_PLACEHOLDER)
        .on_action(Message::EditorAction)
        .height(Length::Fill)
        .style(theme::text_pane)
        .into()
}
