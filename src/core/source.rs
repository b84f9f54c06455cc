//! core/source.rs
//! Turning a dropped / typed reference into a `DropSource`, and the
//! extension gate that decides whether a drop is handled at all.

use std::path::PathBuf;

use image::ImageFormat;
use reqwest::Url;

use super::error::LoadError;
use super::types::DropSource;

impl DropSource {
    /// Parse a path, `file://` URL or `http(s)://` URL.
    ///
    /// Anything that isn't a recognised URL scheme is taken as a filesystem path
    /// (this keeps Windows paths like `C:\img.png` working, which `Url` would
    /// otherwise read as scheme `c`).
    pub fn parse(input: &str) -> Result<DropSource, LoadError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(LoadError::BadReference("empty input".to_string()));
        }

        if let Ok(url) = Url::parse(trimmed) {
            match url.scheme() {
                "http" | "https" => return Ok(DropSource::Remote(url)),
                "file" => {
                    let path = url
                        .to_file_path()
                        .map_err(|_| LoadError::BadReference(trimmed.to_string()))?;
                    return Ok(DropSource::Local(path));
                }
                _ => {}
            }
        }

        Ok(DropSource::Local(PathBuf::from(trimmed)))
    }

    /// Last path component, or last URL path segment.
    pub fn file_name(&self) -> String {
        match self {
            DropSource::Local(path) => path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string(),
            DropSource::Remote(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .unwrap_or_default()
                .to_string(),
        }
    }

    pub fn is_supported(&self) -> bool {
        is_supported_extension(file_extension(&self.file_name()))
    }
}

/// Text after the last `.`.
/// A name without any dot yields the whole name, which then fails the
/// format check, so extension-less files are never handled.
pub fn file_extension(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or(file_name)
}

/// True when the image library knows the extension AND can decode that format.
pub fn is_supported_extension(ext: &str) -> bool {
    if ext.is_empty() {
        return false;
    }

    ImageFormat::from_extension(ext.to_ascii_lowercase()).is_some_and(|f| f.reading_enabled())
}
