//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs are plain data
//! - No GUI types (the GUI converts `PreviewPixels` into its own image handle)
//! - No IO

use std::path::PathBuf;

use image::DynamicImage;
use reqwest::Url;

/// Where a dropped (or typed) image lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropSource {
    Local(PathBuf),
    Remote(Url),
}

/// An image after its bytes have been read and decoded.
///
/// Both representations are kept:
/// - `bytes` for decoders that read container metadata (PNG chunks, EXIF)
/// - `pixels` for decoders that read pixel data (LSB imprints) and for the preview
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub pixels: DynamicImage,
}

/// RGBA8 pixels ready to be uploaded by the GUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Result of handling one drop.
#[derive(Debug, Clone)]
pub struct DropOutcome {
    pub file_name: String,
    /// Text for the text pane (decoded data, the "nothing found" line, or a decode error line).
    pub text: String,
    /// True only when the decoder returned non-empty text.
    pub found: bool,
    pub preview: PreviewPixels,
}
