//! gui/update/animation.rs
//! Frame ticks for the status symbol.

use iced::Task;
use std::time::Instant;

use super::super::state::{ArtiFactual, Message};

pub(crate) fn tick(state: &mut ArtiFactual, now: Instant) -> Task<Message> {
    state.status.advance(now);
    Task::none()
}
