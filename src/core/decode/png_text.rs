//! core/decode/png_text.rs
//! Walks a PNG chunk stream and collects text chunks (`tEXt`, `zTXt`, `iTXt`).

use std::io::Read;

use flate2::read::ZlibDecoder;

use super::super::error::DecodeError;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextChunk {
    pub keyword: String,
    pub text: String,
}

/// Non-PNG input yields an empty list.
pub(crate) fn text_chunks(bytes: &[u8]) -> Result<Vec<TextChunk>, DecodeError> {
    if !bytes.starts_with(&PNG_SIGNATURE) {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    let mut pos = PNG_SIGNATURE.len();

    while pos + 8 <= bytes.len() {
        let length = u32::from_be_bytes([
            bytes[pos],
            bytes[pos + 1],
            bytes[pos + 2],
            bytes[pos + 3],
        ]) as usize;
        let kind = &bytes[pos + 4..pos + 8];

        let data_start = pos + 8;
        let data_end = data_start
            .checked_add(length)
            .ok_or(DecodeError::PngChunks("chunk length overflows"))?;
        // data + 4-byte CRC
        if data_end + 4 > bytes.len() {
            return Err(DecodeError::PngChunks("chunk runs past end of file"));
        }
        let data = &bytes[data_start..data_end];

        match kind {
            b"tEXt" => out.extend(parse_text(data)),
            b"zTXt" => out.extend(parse_ztxt(data)),
            b"iTXt" => out.extend(parse_itxt(data)),
            b"IEND" => break,
            _ => {}
        }

        pos = data_end + 4;
    }

    Ok(out)
}

/// One entry -> its text; several -> `keyword: text` blocks separated by a blank line.
pub(crate) fn format_chunks(chunks: &[TextChunk]) -> Option<String> {
    let non_empty: Vec<&TextChunk> = chunks
        .iter()
        .filter(|c| !c.text.trim().is_empty())
        .collect();

    match non_empty.as_slice() {
        [] => None,
        [only] => Some(only.text.clone()),
        many => Some(
            many.iter()
                .map(|c| format!("{}: {}", c.keyword, c.text))
                .collect::<Vec<_>>()
                .join("\n\n"),
        ),
    }
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn split_nul(data: &[u8]) -> Option<(&[u8], &[u8])> {
    let at = data.iter().position(|&b| b == 0)?;
    Some((&data[..at], &data[at + 1..]))
}

// tEXt: keyword \0 text (both Latin-1)
fn parse_text(data: &[u8]) -> Option<TextChunk> {
    let (keyword, text) = split_nul(data)?;
    Some(TextChunk {
        keyword: latin1(keyword),
        text: latin1(text),
    })
}

/// zlib, the only compression method PNG defines (0).
fn inflate(keyword: &[u8], method: u8, data: &[u8]) -> Option<Vec<u8>> {
    if method != 0 {
        log::debug!("'{}': unknown compression method {method}", latin1(keyword));
        return None;
    }

    let mut out = Vec::new();
    match ZlibDecoder::new(data).read_to_end(&mut out) {
        Ok(_) => Some(out),
        Err(e) => {
            log::debug!("'{}': cannot inflate: {e}", latin1(keyword));
            None
        }
    }
}

// zTXt: keyword \0 method zlib(text, Latin-1)
fn parse_ztxt(data: &[u8]) -> Option<TextChunk> {
    let (keyword, rest) = split_nul(data)?;
    let (&method, compressed) = rest.split_first()?;
    let text = inflate(keyword, method, compressed)?;

    Some(TextChunk {
        keyword: latin1(keyword),
        text: latin1(&text),
    })
}

// iTXt: keyword \0 flag method lang \0 translated \0 text (UTF-8, zlib when flag = 1)
fn parse_itxt(data: &[u8]) -> Option<TextChunk> {
    let (keyword, rest) = split_nul(data)?;
    let (&flag, rest) = rest.split_first()?;
    let (&method, rest) = rest.split_first()?;
    let (_language, rest) = split_nul(rest)?;
    let (_translated, text) = split_nul(rest)?;

    let text = if flag != 0 {
        String::from_utf8_lossy(&inflate(keyword, method, text)?).into_owned()
    } else {
        String::from_utf8_lossy(text).into_owned()
    };

    Some(TextChunk {
        keyword: latin1(keyword),
        text,
    })
}
