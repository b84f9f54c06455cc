//! core/decode/stealth.rs
//! Text hidden in the least-significant bits of pixel channels.
//!
//! Layout (bits packed MSB-first, pixels walked column by column):
//!   [15-byte signature][u32 BE payload length in BITS][payload]
//!
//! Alpha mode reads one bit per pixel, RGB mode reads R, G, B bits in turn.
//! The `*comp` signatures carry a gzip stream instead of raw UTF-8.

use std::io::Read;

use flate2::read::GzDecoder;
use image::RgbaImage;

use super::super::error::DecodeError;

const SIGNATURE_LEN: usize = 15;
const LENGTH_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Channels {
    Alpha,
    Rgb,
}

impl Channels {
    fn indices(self) -> &'static [usize] {
        match self {
            Channels::Alpha => &[3],
            Channels::Rgb => &[0, 1, 2],
        }
    }

    fn signatures(self) -> (&'static str, &'static str) {
        match self {
            Channels::Alpha => ("stealth_pnginfo", "stealth_pngcomp"),
            Channels::Rgb => ("stealth_rgbinfo", "stealth_rgbcomp"),
        }
    }

    fn available_bits(self, image: &RgbaImage) -> u64 {
        u64::from(image.width()) * u64::from(image.height()) * self.indices().len() as u64
    }
}

/// Column-major LSB stream.
struct LsbBits<'a> {
    image: &'a RgbaImage,
    channels: &'static [usize],
    x: u32,
    y: u32,
    c: usize,
}

impl<'a> LsbBits<'a> {
    fn new(image: &'a RgbaImage, channels: Channels) -> Self {
        Self {
            image,
            channels: channels.indices(),
            x: 0,
            y: 0,
            c: 0,
        }
    }

    /// Pull `n` whole bytes, or None if the image runs out first.
    fn take_bytes(&mut self, n: usize) -> Option<Vec<u8>> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            let mut byte = 0u8;
            for _ in 0..8 {
                byte = (byte << 1) | self.next()?;
            }
            out.push(byte);
        }
        Some(out)
    }
}

impl Iterator for LsbBits<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let (w, h) = self.image.dimensions();
        if self.x >= w || h == 0 {
            return None;
        }

        let bit = self.image.get_pixel(self.x, self.y).0[self.channels[self.c]] & 1;

        self.c += 1;
        if self.c == self.channels.len() {
            self.c = 0;
            self.y += 1;
            if self.y == h {
                self.y = 0;
                self.x += 1;
            }
        }

        Some(bit)
    }
}

/// Ok(None) = no signature, so nothing is imprinted in these channels.
pub(crate) fn read_imprint(
    image: &RgbaImage,
    channels: Channels,
) -> Result<Option<String>, DecodeError> {
    let (plain_sig, comp_sig) = channels.signatures();
    let mut bits = LsbBits::new(image, channels);

    let Some(signature) = bits.take_bytes(SIGNATURE_LEN) else {
        return Ok(None);
    };

    let compressed = if signature == comp_sig.as_bytes() {
        true
    } else if signature == plain_sig.as_bytes() {
        false
    } else {
        return Ok(None);
    };

    let header_bits = ((SIGNATURE_LEN + LENGTH_LEN) * 8) as u64;
    let available = channels.available_bits(image).saturating_sub(header_bits);

    let Some(len_bytes) = bits.take_bytes(LENGTH_LEN) else {
        return Err(DecodeError::Truncated {
            declared: 0,
            available: 0,
        });
    };
    let declared = u64::from(u32::from_be_bytes([
        len_bytes[0],
        len_bytes[1],
        len_bytes[2],
        len_bytes[3],
    ]));

    if declared > available {
        return Err(DecodeError::Truncated {
            declared,
            available,
        });
    }
    if declared % 8 != 0 {
        return Err(DecodeError::Misaligned(declared));
    }

    let payload = bits
        .take_bytes((declared / 8) as usize)
        .ok_or(DecodeError::Truncated {
            declared,
            available,
        })?;

    let payload = if compressed {
        gunzip(&payload).map_err(|source| DecodeError::Inflate {
            kind: comp_sig,
            source,
        })?
    } else {
        payload
    };

    let text = String::from_utf8(payload)?;
    Ok(Some(text))
}

fn gunzip(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    GzDecoder::new(bytes).read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::Rgba;

    /// Write `bytes` into the LSBs of `channels`, column-major, MSB-first.
    pub(crate) fn embed(image: &mut RgbaImage, channels: Channels, bytes: &[u8]) {
        let (w, h) = image.dimensions();
        let idx = channels.indices();
        let mut bits = bytes
            .iter()
            .flat_map(|b| (0..8).rev().map(move |i| (b >> i) & 1));

        'outer: for x in 0..w {
            for y in 0..h {
                let px = image.get_pixel_mut(x, y);
                for &c in idx {
                    let Some(bit) = bits.next() else {
                        break 'outer;
                    };
                    px.0[c] = (px.0[c] & !1) | bit;
                }
            }
        }
    }

    pub(crate) fn imprint(signature: &[u8], text: &str) -> Vec<u8> {
        with_payload(signature, text.as_bytes())
    }

    pub(crate) fn gzip_imprint(signature: &[u8], text: &str) -> Vec<u8> {
        use flate2::Compression;
        use flate2::write::GzEncoder;
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(text.as_bytes()).unwrap();
        with_payload(signature, &encoder.finish().unwrap())
    }

    fn with_payload(signature: &[u8], payload: &[u8]) -> Vec<u8> {
        let mut out = signature.to_vec();
        out.extend_from_slice(&((payload.len() * 8) as u32).to_be_bytes());
        out.extend_from_slice(payload);
        out
    }

    fn canvas(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([200, 120, 40, 255]))
    }

    #[test]
    fn reads_alpha_imprint() {
        let mut img = canvas(32, 32);
        embed(
            &mut img,
            Channels::Alpha,
            &imprint(b"stealth_pnginfo", "Steps: 20, Sampler: Euler a"),
        );

        let text = read_imprint(&img, Channels::Alpha).unwrap();
        assert_eq!(text.as_deref(), Some("Steps: 20, Sampler: Euler a"));
    }

    #[test]
    fn reads_rgb_imprint_across_columns() {
        // 7 px tall forces the stream to wrap into new columns mid-byte.
        let mut img = canvas(40, 7);
        embed(
            &mut img,
            Channels::Rgb,
            &imprint(b"stealth_rgbinfo", "a cat, oil painting"),
        );

        let text = read_imprint(&img, Channels::Rgb).unwrap();
        assert_eq!(text.as_deref(), Some("a cat, oil painting"));
    }

    #[test]
    fn clean_image_has_no_imprint() {
        let img = canvas(16, 16);
        assert!(read_imprint(&img, Channels::Rgb).unwrap().is_none());
        assert!(read_imprint(&img, Channels::Alpha).unwrap().is_none());
    }

    #[test]
    fn tiny_image_has_no_imprint() {
        let img = canvas(2, 2);
        assert!(read_imprint(&img, Channels::Rgb).unwrap().is_none());
    }

    #[test]
    fn rgb_signature_is_not_read_from_alpha() {
        let mut img = canvas(32, 32);
        embed(&mut img, Channels::Rgb, &imprint(b"stealth_rgbinfo", "hi"));
        assert!(read_imprint(&img, Channels::Alpha).unwrap().is_none());
    }

    #[test]
    fn oversized_length_is_truncated_error() {
        let mut img = canvas(16, 16);
        let mut bytes = b"stealth_rgbinfo".to_vec();
        bytes.extend_from_slice(&u32::MAX.to_be_bytes());
        embed(&mut img, Channels::Rgb, &bytes);

        assert!(matches!(
            read_imprint(&img, Channels::Rgb),
            Err(DecodeError::Truncated { .. })
        ));
    }

    #[test]
    fn misaligned_length_is_error() {
        let mut img = canvas(16, 16);
        let mut bytes = b"stealth_rgbinfo".to_vec();
        bytes.extend_from_slice(&13u32.to_be_bytes());
        embed(&mut img, Channels::Rgb, &bytes);

        assert!(matches!(
            read_imprint(&img, Channels::Rgb),
            Err(DecodeError::Misaligned(13))
        ));
    }

    #[test]
    fn reads_gzipped_alpha_imprint() {
        let params = "a lighthouse at dusk\nSteps: 30, Sampler: DPM++ 2M Karras, CFG scale: 7";
        let mut img = canvas(48, 48);
        embed(
            &mut img,
            Channels::Alpha,
            &gzip_imprint(b"stealth_pngcomp", params),
        );

        let text = read_imprint(&img, Channels::Alpha).unwrap();
        assert_eq!(text.as_deref(), Some(params));
    }

    #[test]
    fn reads_gzipped_rgb_imprint() {
        let mut img = canvas(24, 24);
        embed(
            &mut img,
            Channels::Rgb,
            &gzip_imprint(b"stealth_rgbcomp", "Négatif: blur"),
        );

        let text = read_imprint(&img, Channels::Rgb).unwrap();
        assert_eq!(text.as_deref(), Some("Négatif: blur"));
    }

    #[test]
    fn corrupt_gzip_payload_is_error() {
        let mut img = canvas(16, 16);
        embed(&mut img, Channels::Alpha, &imprint(b"stealth_pngcomp", "not gzip"));

        assert!(matches!(
            read_imprint(&img, Channels::Alpha),
            Err(DecodeError::Inflate {
                kind: "stealth_pngcomp",
                ..
            })
        ));
    }

    #[test]
    fn invalid_utf8_payload_is_error() {
        let mut img = canvas(16, 16);
        let mut bytes = b"stealth_rgbinfo".to_vec();
        bytes.extend_from_slice(&16u32.to_be_bytes());
        bytes.extend_from_slice(&[0xff, 0xfe]);
        embed(&mut img, Channels::Rgb, &bytes);

        assert!(matches!(
            read_imprint(&img, Channels::Rgb),
            Err(DecodeError::NotUtf8(_))
        ));
    }
}
