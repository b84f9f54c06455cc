//! ArtiFactual
//!
//! # What this program is
//! A small desktop app (built with the `iced` GUI library): drop an image on the
//! window, and it shows whatever text is imprinted in that image (generation
//! parameters hidden in pixel LSBs, PNG text chunks, EXIF comments).
//!
//! # How it's wired
//! - `ArtiFactual` = all app state (text pane, preview, status symbol, ...)
//! - `Message` = something happened (file dropped, worker finished, button clicked)
//! - `update(state, message)` mutates state, maybe starts background work
//! - `view(state)` draws the window from state
//!
//! # Behavior
//! - Drop a file (or paste a path / URL): unsupported extensions are ignored.
//! - The image is loaded and decoded on a worker thread, then:
//!   - text pane = decoded text, or "No imprinted data found in <name>.",
//!     or "Error decoding image info: <error>"
//!   - preview = the image scaled down to fit
//!   - a check mark fades in and out in the corner
//! - Copy puts the text pane on the clipboard; Exit closes the window.
//!
//! # Layers
//! - `core`: loading, decoding, config (no GUI types)
//! - `gui`: state, update, view, subscriptions

mod core;
mod gui;

use iced::{Size, window};

use crate::core::config::Config;
use crate::gui::ArtiFactual;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    let settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        icon: gui::assets::window_icon(&config),
        ..window::Settings::default()
    };

    iced::application(move || ArtiFactual::new(config.clone()), gui::update, gui::view)
        .title("ArtiFactual")
        .theme(gui::theme)
        .subscription(gui::subscription)
        .window(settings)
        .run()
}
