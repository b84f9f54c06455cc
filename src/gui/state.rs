//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use iced::Size;
use iced::widget::{image, text_editor};

use crate::core::config::Config;
use crate::core::decode::{Decoder, ImprintDecoder};
use crate::core::fetch::{Fetch, HttpFetcher, Unavailable};
use crate::core::types::DropOutcome;

use super::assets::Assets;
use super::status::StatusSymbol;
use super::view::constants::PADDING;

/// A load/decode that has been handed to a worker and not answered yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InFlight {
    pub id: u64,
    pub file_name: String,
}

/// OS drag gesture. A multi-file drop arrives as one `FileDropped` per file;
/// only the first one of a gesture is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum DragState {
    #[default]
    Idle,
    Hovering,
    Dropped,
}

/// App state
pub(crate) struct ArtiFactual {
    pub config: Config,
    pub assets: Assets,

    // Collaborators (shared with worker threads)
    pub decoder: Arc<dyn Decoder>,
    pub fetcher: Arc<dyn Fetch>,

    // Text pane
    pub text: text_editor::Content,

    // Drop area
    pub preview: Option<image::Handle>,
    pub hovering: bool,
    pub drag: DragState,
    pub url_input: String,
    pub status: StatusSymbol,

    // Requests: ids only grow; only the newest one is applied.
    pub next_request: u64,
    pub in_flight: Option<InFlight>,

    pub window_size: Size,
}

impl ArtiFactual {
    /// Real app: assets from disk, HTTP fetcher, built-in decoder.
    pub(crate) fn new(config: Config) -> Self {
        let assets = Assets::load(&config);

        let fetcher: Arc<dyn Fetch> = match HttpFetcher::new(config.fetch_timeout()) {
            Ok(f) => Arc::new(f),
            Err(e) => {
                log::error!("remote images disabled: {e}");
                Arc::new(Unavailable(e.to_string()))
            }
        };

        Self::with_parts(config, assets, Arc::new(ImprintDecoder), fetcher)
    }

    pub(crate) fn with_parts(
        config: Config,
        assets: Assets,
        decoder: Arc<dyn Decoder>,
        fetcher: Arc<dyn Fetch>,
    ) -> Self {
        let status = StatusSymbol::new(
            config.checkmark_opacity,
            config.animation_length(),
            assets.check_delays.clone(),
        );
        let window_size = Size::new(config.window_width, config.window_height);

        Self {
            config,
            assets,
            decoder,
            fetcher,
            text: text_editor::Content::new(),
            preview: None,
            hovering: false,
            drag: DragState::Idle,
            url_input: String::new(),
            status,
            next_request: 0,
            in_flight: None,
            window_size,
        }
    }

    /// Largest preview (w, h) the drop area can show at the current window size.
    pub(crate) fn preview_bound(&self) -> (u32, u32) {
        let w = (self.window_size.width - 2.0 * PADDING).max(1.0);
        let h = self.config.drop_area_height.max(1.0);
        (w as u32, h as u32)
    }

    /// Exactly what the text pane holds right now.
    pub(crate) fn clipboard_payload(&self) -> String {
        self.text.text()
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // OS drag-and-drop
    FileHovered(PathBuf),
    FilesHoveredLeft,
    FileDropped(PathBuf),

    // Typed / pasted reference
    UrlInputChanged(String),
    UrlSubmitted,

    // Worker finished (request id, outcome)
    DropProcessed(u64, Result<DropOutcome, String>),

    // Status symbol frames
    AnimationTick(Instant),

    // Text pane
    EditorAction(text_editor::Action),

    // Button bar
    CopyPressed,
    ExitPressed,

    WindowResized(Size),
}
