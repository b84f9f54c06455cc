//! gui/assets.rs
//! Static assets from `Config::assets_dir`:
//! - check.gif      status symbol animation
//! - detective.png  window icon
//! - clipboard_i.png / exit_i.png  button icons
//!
//! Nothing here is fatal. A missing or broken file is logged and replaced:
//! the check animation is drawn in code, icons are simply left out.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use iced::widget::image::Handle;
use image::codecs::gif::GifDecoder;
use image::imageops::FilterType;
use image::{AnimationDecoder, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::core::config::Config;

const CHECK_GIF: &str = "check.gif";
const WINDOW_ICON: &str = "detective.png";
const COPY_ICON: &str = "clipboard_i.png";
const EXIT_ICON: &str = "exit_i.png";

/// GIF frames with a 0 delay are shown this long.
const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

const DRAWN_FRAMES: usize = 12;
const DRAWN_FRAME_DELAY: Duration = Duration::from_millis(40);
const CHECK_GREEN: Rgba<u8> = Rgba([0, 210, 53, 255]);

#[derive(Debug, Clone)]
pub(crate) struct Assets {
    pub check_frames: Vec<Handle>,
    pub check_delays: Vec<Duration>,
    pub copy_icon: Option<Handle>,
    pub exit_icon: Option<Handle>,
}

impl Assets {
    pub(crate) fn load(config: &Config) -> Self {
        let dir = &config.assets_dir;
        let size = config.status_size;

        let (frames, delays) = match load_gif_frames(&dir.join(CHECK_GIF), size) {
            Ok(frames) if !frames.is_empty() => frames.into_iter().unzip(),
            Ok(_) => {
                log::warn!("{CHECK_GIF} has no frames; drawing the check mark instead");
                drawn_check(size)
            }
            Err(e) => {
                log::warn!("{e}; drawing the check mark instead");
                drawn_check(size)
            }
        };

        Self {
            check_frames: frames.into_iter().map(to_handle).collect(),
            check_delays: delays,
            copy_icon: icon_handle(&dir.join(COPY_ICON)),
            exit_icon: icon_handle(&dir.join(EXIT_ICON)),
        }
    }

    /// No disk access: drawn check mark, no icons.
    pub(crate) fn fallback(config: &Config) -> Self {
        let (frames, delays) = drawn_check(config.status_size);
        Self {
            check_frames: frames.into_iter().map(to_handle).collect(),
            check_delays: delays,
            copy_icon: None,
            exit_icon: None,
        }
    }
}

/// Window icon for `window::Settings`, if the file is there and decodes.
pub(crate) fn window_icon(config: &Config) -> Option<iced::window::Icon> {
    let path = config.assets_dir.join(WINDOW_ICON);
    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            log::warn!("no window icon ({}): {e}", path.display());
            return None;
        }
    };

    iced::window::icon::from_file_data(&bytes, None)
        .map_err(|e| log::warn!("bad window icon {}: {e}", path.display()))
        .ok()
}

fn icon_handle(path: &Path) -> Option<Handle> {
    if path.is_file() {
        Some(Handle::from_path(path))
    } else {
        log::warn!("missing icon {}", path.display());
        None
    }
}

fn to_handle(frame: RgbaImage) -> Handle {
    let (w, h) = frame.dimensions();
    Handle::from_rgba(w, h, frame.into_raw())
}

/// Decode every frame, scaled to `size` x `size`.
fn load_gif_frames(path: &Path, size: u32) -> Result<Vec<(RgbaImage, Duration)>, String> {
    let file = File::open(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let decoder =
        GifDecoder::new(BufReader::new(file)).map_err(|e| format!("{}: {e}", path.display()))?;

    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| format!("{}: {e}", path.display()))?;

    Ok(frames
        .into_iter()
        .map(|frame| {
            let (num, den) = frame.delay().numer_denom_ms();
            let delay = if num == 0 || den == 0 {
                DEFAULT_FRAME_DELAY
            } else {
                Duration::from_nanos(u64::from(num) * 1_000_000 / u64::from(den))
            };

            let buffer = frame.into_buffer();
            let scaled = if buffer.dimensions() == (size, size) {
                buffer
            } else {
                image::imageops::resize(&buffer, size, size, FilterType::Triangle)
            };

            (scaled, delay)
        })
        .collect())
}

fn drawn_check(size: u32) -> (Vec<RgbaImage>, Vec<Duration>) {
    let frames = draw_check_frames(size, DRAWN_FRAMES);
    let delays = vec![DRAWN_FRAME_DELAY; frames.len()];
    (frames, delays)
}

/// A check mark stroked a little further in each frame; the last frame is complete.
pub(crate) fn draw_check_frames(size: u32, count: usize) -> Vec<RgbaImage> {
    let s = size as f32;
    let path = [(0.22 * s, 0.52 * s), (0.42 * s, 0.72 * s), (0.78 * s, 0.30 * s)];
    let radius = ((0.07 * s).round() as i32).max(1);

    let seg_len = |a: (f32, f32), b: (f32, f32)| ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
    let total = seg_len(path[0], path[1]) + seg_len(path[1], path[2]);

    (1..=count)
        .map(|k| {
            let mut img = RgbaImage::new(size, size);
            let mut budget = total * k as f32 / count as f32;

            for pair in path.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let len = seg_len(a, b);
                let drawn = budget.min(len);
                stroke(&mut img, a, b, drawn / len, radius);
                budget -= drawn;
                if budget <= 0.0 {
                    break;
                }
            }

            img
        })
        .collect()
}

/// Round-capped stroke along a..b, up to `fraction` of its length.
fn stroke(img: &mut RgbaImage, a: (f32, f32), b: (f32, f32), fraction: f32, radius: i32) {
    let end = (a.0 + (b.0 - a.0) * fraction, a.1 + (b.1 - a.1) * fraction);
    let steps = ((end.0 - a.0).abs().max((end.1 - a.1).abs())).ceil().max(1.0) as usize;

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let center = (
            (a.0 + (end.0 - a.0) * t).round() as i32,
            (a.1 + (end.1 - a.1) * t).round() as i32,
        );
        draw_filled_circle_mut(img, center, radius, CHECK_GREEN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawn_frames_grow_the_stroke() {
        let frames = draw_check_frames(64, 12);
        assert_eq!(frames.len(), 12);
        assert!(frames.iter().all(|f| f.dimensions() == (64, 64)));

        let painted = |f: &RgbaImage| f.pixels().filter(|p| p.0[3] > 0).count();
        let counts: Vec<usize> = frames.iter().map(painted).collect();
        assert!(counts.windows(2).all(|w| w[0] <= w[1]), "{counts:?}");

        // Far end of the long stroke only appears at the end.
        let tip = (0.78 * 64.0) as u32;
        let tip_y = (0.30 * 64.0) as u32;
        assert_eq!(frames[0].get_pixel(tip, tip_y).0[3], 0);
        assert_eq!(*frames[11].get_pixel(tip, tip_y), CHECK_GREEN);
    }

    #[test]
    fn missing_assets_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            assets_dir: dir.path().to_path_buf(),
            ..Config::default()
        };

        let assets = Assets::load(&config);
        assert_eq!(assets.check_frames.len(), DRAWN_FRAMES);
        assert_eq!(assets.check_delays, vec![DRAWN_FRAME_DELAY; DRAWN_FRAMES]);
        assert!(assets.copy_icon.is_none());
        assert!(assets.exit_icon.is_none());
        assert!(window_icon(&config).is_none());
    }

    #[test]
    fn gif_frames_are_scaled_with_delays() {
        use image::codecs::gif::GifEncoder;
        use image::{Delay, Frame};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CHECK_GIF);
        {
            let file = File::create(&path).unwrap();
            let mut encoder = GifEncoder::new(file);
            let frames = (0..3).map(|i| {
                Frame::from_parts(
                    RgbaImage::from_pixel(16, 16, Rgba([0, 80 * i as u8, 0, 255])),
                    0,
                    0,
                    Delay::from_numer_denom_ms(if i == 1 { 0 } else { 50 }, 1),
                )
            });
            encoder.encode_frames(frames).unwrap();
        }

        let frames = load_gif_frames(&path, 32).unwrap();
        assert_eq!(frames.len(), 3);
        assert!(frames.iter().all(|(f, _)| f.dimensions() == (32, 32)));
        assert_eq!(frames[0].1, Duration::from_millis(50));
        assert_eq!(frames[1].1, DEFAULT_FRAME_DELAY);
    }
}
