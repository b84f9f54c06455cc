//! GUI renderer (reads state, produces widgets; no mutation).
//!
//! Top to bottom: drop area, path/URL row, text pane, button bar.

mod button_bar;
pub(crate) mod constants;
mod drop_area;
mod text_pane;

use iced::widget::{Column, column};

use super::state::{ArtiFactual, Message};
use constants::{PADDING, SPACING};

pub(crate) fn view(state: &ArtiFactual) -> Column<'_, Message> {
    column![
        drop_area::build_drop_area(state),
        drop_area::build_url_row(state),
        text_pane::build_text_pane(state),
        button_bar::build_button_bar(state),
    ]
    .spacing(SPACING)
    .padding(PADDING)
}
