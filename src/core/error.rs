//! core/error.rs
//! Typed errors for loading, decoding and configuration.
//!
//! The GUI never matches on these; it renders them with `Display`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("not a usable image reference: {0}")]
    BadReference(String),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("download failed: {0}")]
    Fetch(String),

    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("unrecognised image data: {0}")]
    Image(#[from] image::ImageError),

    #[error("loader crashed: {0}")]
    Panicked(String),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("imprint declares {declared} bits but only {available} are available")]
    Truncated { declared: u64, available: u64 },

    #[error("imprint length {0} is not a whole number of bytes")]
    Misaligned(u64),

    #[error("imprinted text is not valid UTF-8")]
    NotUtf8(#[from] std::string::FromUtf8Error),

    #[error("cannot decompress {kind} imprint: {source}")]
    Inflate {
        kind: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("decoder crashed: {0}")]
    Panicked(String),

    #[error("malformed PNG chunk stream: {0}")]
    PngChunks(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
