//! core/fetch.rs
//! Remote image download.
//!
//! `Fetch` is a seam so the pipeline can be exercised without a network.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;

use super::error::LoadError;

pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, LoadError>;
}

/// Blocking HTTP GET. Always called off the UI thread.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("artifactual/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LoadError::Fetch(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, LoadError> {
        log::info!("fetching {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| LoadError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .map_err(|e| LoadError::Fetch(e.to_string()))?;

        log::debug!("fetched {} bytes from {url}", bytes.len());
        Ok(bytes.to_vec())
    }
}

/// Stand-in when no HTTP client could be built; every fetch fails with the reason.
pub struct Unavailable(pub String);

impl Fetch for Unavailable {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, LoadError> {
        Err(LoadError::Fetch(format!("{url}: {}", self.0)))
    }
}
