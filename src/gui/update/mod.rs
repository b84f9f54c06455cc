//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{ArtiFactual, Message};

mod actions;
mod animation;
mod drop;
mod util;

pub(crate) fn update(state: &mut ArtiFactual, message: Message) -> Task<Message> {
    match message {
        // Drag-and-drop
        Message::FileHovered(path) => drop::file_hovered(state, path),
        Message::FilesHoveredLeft => drop::files_hovered_left(state),
        Message::FileDropped(path) => drop::file_dropped(state, path),

        // Typed reference
        Message::UrlInputChanged(s) => drop::url_input_changed(state, s),
        Message::UrlSubmitted => drop::url_submitted(state),

        // Worker result
        Message::DropProcessed(id, result) => drop::drop_processed(state, id, result),

        // Status symbol
        Message::AnimationTick(now) => animation::tick(state, now),

        // Text pane + buttons
        Message::EditorAction(action) => actions::editor_action(state, action),
        Message::CopyPressed => actions::copy_pressed(state),
        Message::ExitPressed => actions::exit_pressed(state),

        Message::WindowResized(size) => {
            state.window_size = size;
            Task::none()
        }
    }
}
