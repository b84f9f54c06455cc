//! core/mod.rs
//!
//! Everything that isn't drawing widgets:
//! - Parse a dropped reference and decide if it's an image we handle
//! - Load bytes (disk or HTTP) and decode pixels
//! - Ask the decoder for imprinted text
//! - Prepare a preview that fits the drop area
//!
//! The drop pipeline is explicit:
//!   (A) load_image(source) -> LoadedImage
//!   (B) describe(image)    -> text for the pane
//!   (C) make_preview(image, bound) -> PreviewPixels
//!
//! The GUI only calls `process_drop` (on a worker thread) and renders the result.

pub mod config;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod source;
pub mod types;

use std::any::Any;
use std::fs;
use std::panic::{self, AssertUnwindSafe};

use image::DynamicImage;
use image::imageops::FilterType;

use decode::Decoder;
use error::{DecodeError, LoadError};
use fetch::Fetch;
use types::{DropOutcome, DropSource, LoadedImage, PreviewPixels};

/// Read the referenced bytes and decode them into pixels.
///
/// - Local: read from disk
/// - Remote: fetched through `fetcher`
/// - Format is sniffed from content, not trusted from the extension
pub fn load_image(source: &DropSource, fetcher: &dyn Fetch) -> Result<LoadedImage, LoadError> {
    let bytes = match source {
        DropSource::Local(path) => fs::read(path).map_err(|source| LoadError::Read {
            path: path.clone(),
            source,
        })?,
        DropSource::Remote(url) => fetcher.fetch(url)?,
    };

    let pixels = image::load_from_memory(&bytes)?;

    Ok(LoadedImage {
        file_name: source.file_name(),
        bytes,
        pixels,
    })
}

/// Run the decoder once and turn its answer into pane text.
///
/// Returns (text, found):
/// - non-empty text -> (text, true)
/// - nothing / empty -> ("No imprinted data found in <name>.", false)
/// - error (or a panicking decoder) -> ("Error decoding image info: <e>", false)
pub fn describe(image: &LoadedImage, decoder: &dyn Decoder) -> (String, bool) {
    let answer = panic::catch_unwind(AssertUnwindSafe(|| decoder.try_decode(image)))
        .unwrap_or_else(|payload| Err(DecodeError::Panicked(panic_message(payload))));

    match answer {
        Ok(Some(text)) if !text.trim().is_empty() => (text, true),
        Ok(_) => (
            format!("No imprinted data found in {}.", image.file_name),
            false,
        ),
        Err(e) => {
            log::warn!("{}: decode failed: {e}", image.file_name);
            (format!("Error decoding image info: {e}"), false)
        }
    }
}

/// Fit (w, h) inside (max_w, max_h) keeping aspect ratio.
/// Images that already fit are left alone (never upscaled).
pub fn scale_to_fit(w: u32, h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if w == 0 || h == 0 || max_w == 0 || max_h == 0 {
        return (w, h);
    }
    if w <= max_w && h <= max_h {
        return (w, h);
    }

    let scale = f64::min(max_w as f64 / w as f64, max_h as f64 / h as f64);
    let sw = ((w as f64 * scale).round() as u32).clamp(1, max_w);
    let sh = ((h as f64 * scale).round() as u32).clamp(1, max_h);
    (sw, sh)
}

pub fn make_preview(pixels: &DynamicImage, bound: (u32, u32)) -> PreviewPixels {
    let (w, h) = (pixels.width(), pixels.height());
    let (sw, sh) = scale_to_fit(w, h, bound.0, bound.1);

    let rgba = if (sw, sh) == (w, h) {
        pixels.to_rgba8()
    } else {
        pixels.resize_exact(sw, sh, FilterType::Triangle).to_rgba8()
    };

    PreviewPixels {
        width: sw,
        height: sh,
        rgba: rgba.into_raw(),
    }
}

/// Full drop pipeline (blocking; call off the UI thread).
///
/// Load failures are returned as `Err(message)` ready for display.
/// Decode failures are NOT errors here: they become pane text, and the drop still
/// counts as handled (preview + status symbol).
pub fn process_drop(
    source: &DropSource,
    fetcher: &dyn Fetch,
    decoder: &dyn Decoder,
    bound: (u32, u32),
) -> Result<DropOutcome, String> {
    let file_name = source.file_name();

    let image = panic::catch_unwind(AssertUnwindSafe(|| load_image(source, fetcher)))
        .unwrap_or_else(|payload| Err(LoadError::Panicked(panic_message(payload))))
        .map_err(|e| {
            log::warn!("{file_name}: load failed: {e}");
            format!("Error loading {file_name}: {e}")
        })?;

    log::info!(
        "{file_name}: loaded {}x{} ({} bytes)",
        image.pixels.width(),
        image.pixels.height(),
        image.bytes.len()
    );

    let (text, found) = describe(&image, decoder);
    let preview = make_preview(&image.pixels, bound);

    Ok(DropOutcome {
        file_name,
        text,
        found,
        preview,
    })
}

/// Text of a caught panic (`panic!("..")` payloads are `&str` or `String`).
pub(crate) fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
