//! gui/update/drop.rs
//!
//! Drop lifecycle:
//! - hover: highlight the drop area when the first dragged file is one we can handle
//! - drop / submit: gate on extension, hand the work to a worker thread.
//!   Of a multi-file drop only the first file counts.
//! - processed: apply the newest result (text, preview, status symbol)
//!
//! Unsupported extensions are ignored completely: no text change, no preview
//! change, no status symbol.

use iced::Task;
use iced::widget::image;
use std::path::PathBuf;
use std::time::Instant;

use crate::core;
use crate::core::types::{DropOutcome, DropSource};

use super::super::state::{ArtiFactual, DragState, InFlight, Message};
use super::actions::set_text;
use super::util::spawn_blocking;

pub(crate) fn file_hovered(state: &mut ArtiFactual, path: PathBuf) -> Task<Message> {
    // One event per dragged file; the first decides the highlight.
    if state.drag != DragState::Hovering {
        state.drag = DragState::Hovering;
        state.hovering = DropSource::Local(path).is_supported();
    }
    Task::none()
}

pub(crate) fn files_hovered_left(state: &mut ArtiFactual) -> Task<Message> {
    state.drag = DragState::Idle;
    state.hovering = false;
    Task::none()
}

pub(crate) fn file_dropped(state: &mut ArtiFactual, path: PathBuf) -> Task<Message> {
    state.hovering = false;

    if state.drag == DragState::Dropped {
        log::debug!("ignoring extra dropped file {}", path.display());
        return Task::none();
    }
    state.drag = DragState::Dropped;

    start_request(state, DropSource::Local(path))
}

pub(crate) fn url_input_changed(state: &mut ArtiFactual, s: String) -> Task<Message> {
    state.url_input = s;
    Task::none()
}

pub(crate) fn url_submitted(state: &mut ArtiFactual) -> Task<Message> {
    let input = state.url_input.trim();
    if input.is_empty() {
        return Task::none();
    }

    let source = match DropSource::parse(input) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("{e}");
            return Task::none();
        }
    };

    if !source.is_supported() {
        log::info!("not an image we can read: {input}");
        return Task::none();
    }

    state.url_input.clear();
    start_request(state, source)
}

/// Gate + dispatch. Returns `Task::none()` (and touches nothing) for unsupported files.
fn start_request(state: &mut ArtiFactual, source: DropSource) -> Task<Message> {
    let file_name = source.file_name();

    if !source.is_supported() {
        log::debug!("ignoring drop of {file_name:?}: unsupported extension");
        return Task::none();
    }

    state.next_request += 1;
    let id = state.next_request;
    state.in_flight = Some(InFlight {
        id,
        file_name: file_name.clone(),
    });

    log::info!("request {id}: {file_name}");

    let decoder = state.decoder.clone();
    let fetcher = state.fetcher.clone();
    let bound = state.preview_bound();

    Task::perform(
        spawn_blocking(move || {
            core::process_drop(&source, fetcher.as_ref(), decoder.as_ref(), bound)
        }),
        move |result| {
            let result =
                result.unwrap_or_else(|e| Err(format!("Error loading {file_name}: {e}")));
            Message::DropProcessed(id, result)
        },
    )
}

pub(crate) fn drop_processed(
    state: &mut ArtiFactual,
    id: u64,
    result: Result<DropOutcome, String>,
) -> Task<Message> {
    // A newer drop superseded this one.
    if state.in_flight.as_ref().map(|r| r.id) != Some(id) {
        log::debug!("discarding stale result for request {id}");
        return Task::none();
    }
    state.in_flight = None;

    match result {
        Ok(outcome) => {
            log::info!(
                "request {id}: {} ({})",
                outcome.file_name,
                if outcome.found { "data found" } else { "no data" }
            );

            set_text(state, &outcome.text);

            let preview = outcome.preview;
            state.preview = Some(image::Handle::from_rgba(
                preview.width,
                preview.height,
                preview.rgba,
            ));

            state.status.start(Instant::now());
        }
        Err(message) => {
            // Load failed: say so, keep the previous preview.
            set_text(state, &message);
        }
    }

    Task::none()
}
