//! core/decode/exif_text.rs
//! Text stored in EXIF (JPEG / WebP / TIFF / PNG eXIf).

use std::io::Cursor;

use exif::{In, Reader, Tag, Value};

/// First non-empty of UserComment, ImageDescription.
/// Missing or unreadable EXIF is just "nothing here".
pub(crate) fn exif_text(bytes: &[u8]) -> Option<String> {
    let exif = Reader::new()
        .read_from_container(&mut Cursor::new(bytes))
        .ok()?;

    for tag in [Tag::UserComment, Tag::ImageDescription] {
        let Some(field) = exif.get_field(tag, In::PRIMARY) else {
            continue;
        };

        let text = match &field.value {
            Value::Undefined(raw, _) => decode_user_comment(raw),
            Value::Ascii(values) => values
                .first()
                .map(|v| String::from_utf8_lossy(v).into_owned()),
            _ => None,
        };

        if let Some(text) = text.map(clean).filter(|t| !t.is_empty()) {
            return Some(text);
        }
    }

    None
}

/// UserComment = 8-byte charset id + body.
pub(crate) fn decode_user_comment(raw: &[u8]) -> Option<String> {
    if raw.len() < 8 {
        return None;
    }
    let (charset, body) = raw.split_at(8);

    match charset {
        b"ASCII\0\0\0" | b"\0\0\0\0\0\0\0\0" => Some(String::from_utf8_lossy(body).into_owned()),
        b"UNICODE\0" => Some(utf16(body)),
        _ => {
            log::debug!("unsupported UserComment charset {charset:?}");
            None
        }
    }
}

/// Writers disagree on byte order; guess from where the zero bytes of ASCII-range text sit.
fn utf16(body: &[u8]) -> String {
    let big_endian = match body {
        [0, b, ..] if *b != 0 => true,
        [a, 0, ..] if *a != 0 => false,
        _ => true,
    };

    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    String::from_utf16_lossy(&units)
}

fn clean(s: String) -> String {
    s.trim_end_matches('\0').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16_bytes(s: &str, big_endian: bool) -> Vec<u8> {
        s.encode_utf16()
            .flat_map(|u| {
                if big_endian {
                    u.to_be_bytes()
                } else {
                    u.to_le_bytes()
                }
            })
            .collect()
    }

    #[test]
    fn ascii_comment() {
        let mut raw = b"ASCII\0\0\0".to_vec();
        raw.extend_from_slice(b"Steps: 30");
        assert_eq!(decode_user_comment(&raw).as_deref(), Some("Steps: 30"));
    }

    #[test]
    fn unicode_comment_both_byte_orders() {
        for be in [true, false] {
            let mut raw = b"UNICODE\0".to_vec();
            raw.extend(utf16_bytes("Négatif: blur", be));
            assert_eq!(
                decode_user_comment(&raw).as_deref(),
                Some("Négatif: blur"),
                "big_endian={be}"
            );
        }
    }

    #[test]
    fn undefined_charset_is_utf8() {
        let mut raw = vec![0u8; 8];
        raw.extend_from_slice("ok ✓".as_bytes());
        assert_eq!(decode_user_comment(&raw).as_deref(), Some("ok ✓"));
    }

    #[test]
    fn short_or_unknown_is_none() {
        assert_eq!(decode_user_comment(b"ASCII"), None);
        assert_eq!(decode_user_comment(b"JIS\0\0\0\0\0abc"), None);
    }

    /// Minimal TIFF carrying the given primary-IFD fields.
    fn tiff_with(fields: &[exif::Field]) -> Vec<u8> {
        let mut writer = exif::experimental::Writer::new();
        for field in fields {
            writer.push_field(field);
        }
        let mut out = Cursor::new(Vec::new());
        writer.write(&mut out, false).unwrap();
        out.into_inner()
    }

    fn user_comment(text: &str) -> exif::Field {
        let mut raw = b"ASCII\0\0\0".to_vec();
        raw.extend_from_slice(text.as_bytes());
        exif::Field {
            tag: Tag::UserComment,
            ifd_num: In::PRIMARY,
            value: Value::Undefined(raw, 0),
        }
    }

    fn description(text: &str) -> exif::Field {
        exif::Field {
            tag: Tag::ImageDescription,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![text.as_bytes().to_vec()]),
        }
    }

    #[test]
    fn reads_user_comment_from_container() {
        let bytes = tiff_with(&[user_comment("Steps: 25, CFG scale: 6")]);
        assert_eq!(exif_text(&bytes).as_deref(), Some("Steps: 25, CFG scale: 6"));
    }

    #[test]
    fn falls_back_to_image_description() {
        let bytes = tiff_with(&[description("harbour at night")]);
        assert_eq!(exif_text(&bytes).as_deref(), Some("harbour at night"));
    }

    #[test]
    fn user_comment_wins_over_description() {
        let bytes = tiff_with(&[description("from description"), user_comment("from comment")]);
        assert_eq!(exif_text(&bytes).as_deref(), Some("from comment"));
    }

    #[test]
    fn blank_user_comment_falls_through() {
        let bytes = tiff_with(&[user_comment("   "), description("fallback")]);
        assert_eq!(exif_text(&bytes).as_deref(), Some("fallback"));
    }

    #[test]
    fn no_exif_is_none() {
        assert_eq!(exif_text(b"not an image"), None);
    }

    #[test]
    fn trailing_nuls_are_trimmed() {
        assert_eq!(clean("text\0\0".to_string()), "text");
    }
}
