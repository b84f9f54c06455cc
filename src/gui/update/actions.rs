//! gui/update/actions.rs
//! Text pane edits + button bar (Copy, Exit).

use iced::Task;
use iced::widget::text_editor;

use super::super::state::{ArtiFactual, Message};

/// Replace the whole pane (clear, then set).
pub(crate) fn set_text(state: &mut ArtiFactual, text: &str) {
    state.text = text_editor::Content::with_text(text);
}

pub(crate) fn editor_action(state: &mut ArtiFactual, action: text_editor::Action) -> Task<Message> {
    state.text.perform(action);
    Task::none()
}

pub(crate) fn copy_pressed(state: &mut ArtiFactual) -> Task<Message> {
    let payload = state.clipboard_payload();
    log::info!("copied {} characters to the clipboard", payload.chars().count());
    iced::clipboard::write(payload)
}

pub(crate) fn exit_pressed(_state: &mut ArtiFactual) -> Task<Message> {
    log::info!("exit requested");
    iced::exit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::core::config::Config;
    use crate::core::decode::ImprintDecoder;
    use crate::core::fetch::Unavailable;
    use crate::gui::assets::Assets;

    fn app() -> ArtiFactual {
        let config = Config::default();
        let assets = Assets::fallback(&config);
        ArtiFactual::with_parts(
            config,
            assets,
            Arc::new(ImprintDecoder),
            Arc::new(Unavailable("offline".into())),
        )
    }

    #[test]
    fn copy_payload_is_pane_text_verbatim() {
        let mut state = app();
        let text = "Steps: 28, Sampler: DPM++ 2M\nNegative prompt: lowres, <bad>\tCFG: 7";
        set_text(&mut state, text);

        assert_eq!(state.clipboard_payload(), text);
    }

    #[test]
    fn empty_pane_copies_nothing() {
        let state = app();
        assert_eq!(state.clipboard_payload(), "");
    }

    #[test]
    fn set_text_replaces_rather_than_appends() {
        let mut state = app();
        set_text(&mut state, "first");
        set_text(&mut state, "second");
        assert_eq!(state.clipboard_payload(), "second");
    }
}
