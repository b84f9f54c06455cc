//! core/decode/mod.rs
//!
//! The decoder seam: "given a loaded image, what text is imprinted in it?"
//!
//! - `Decoder` is what the pipeline calls (exactly once per drop)
//! - `ImprintDecoder` is the built-in implementation
//!
//! `Ok(None)` means "looked, found nothing". `Err` means the image claims to
//! carry data that could not be read.

mod exif_text;
mod png_text;
mod stealth;

use super::error::DecodeError;
use super::types::LoadedImage;

use stealth::Channels;

pub trait Decoder: Send + Sync {
    fn try_decode(&self, image: &LoadedImage) -> Result<Option<String>, DecodeError>;
}

/// Checks, in order, and returns the first hit:
/// 1. LSB imprint in alpha (only for images with alpha)
/// 2. LSB imprint in RGB
/// 3. PNG text chunks
/// 4. EXIF UserComment / ImageDescription
#[derive(Debug, Default, Clone, Copy)]
pub struct ImprintDecoder;

impl Decoder for ImprintDecoder {
    fn try_decode(&self, image: &LoadedImage) -> Result<Option<String>, DecodeError> {
        let rgba = image.pixels.to_rgba8();

        if image.pixels.color().has_alpha() {
            if let Some(text) = stealth::read_imprint(&rgba, Channels::Alpha)? {
                log::debug!("{}: alpha imprint", image.file_name);
                return Ok(Some(text));
            }
        }

        if let Some(text) = stealth::read_imprint(&rgba, Channels::Rgb)? {
            log::debug!("{}: rgb imprint", image.file_name);
            return Ok(Some(text));
        }

        let chunks = png_text::text_chunks(&image.bytes)?;
        if let Some(text) = png_text::format_chunks(&chunks) {
            log::debug!("{}: {} PNG text chunk(s)", image.file_name, chunks.len());
            return Ok(Some(text));
        }

        if let Some(text) = exif_text::exif_text(&image.bytes) {
            log::debug!("{}: EXIF text", image.file_name);
            return Ok(Some(text));
        }

        Ok(None)
    }
}
