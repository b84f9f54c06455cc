//! gui/subscription.rs
//! - OS drag-and-drop + resize events, always
//! - Animation ticks, only while the status symbol is on screen

use iced::event::{self, Event};
use iced::{Subscription, time, window};
use std::time::Duration;

use super::state::{ArtiFactual, Message};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub(crate) fn subscription(state: &ArtiFactual) -> Subscription<Message> {
    let window_events = event::listen_with(window_event);

    if !state.status.is_visible() {
        return window_events;
    }

    Subscription::batch([
        window_events,
        time::every(FRAME_INTERVAL).map(Message::AnimationTick),
    ])
}

fn window_event(event: Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileHovered(path)) => Some(Message::FileHovered(path)),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    }
}
