//! View constants (layout/sizing).

pub(crate) const PADDING: f32 = 10.0;
pub(crate) const SPACING: f32 = 8.0;

pub(crate) const BAR_H: f32 = 36.0;
pub(crate) const BUTTON_W: f32 = 64.0;
/// Icons take this share of the button height.
pub(crate) const ICON_SCALE: f32 = 0.8;

pub(crate) const DROP_PROMPT: &str = "Drag and drop an image here";
pub(crate) const URL_PLACEHOLDER: &str = "…or paste an image path / URL";
pub(crate) const TEXT_PLACEHOLDER: &str = "(Pending)";
