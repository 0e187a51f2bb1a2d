//! Runtime-selected fetch backend.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::FetchError;
use crate::fetcher::Fetcher;
use crate::fs::FsFetcher;
use crate::http::HttpFetcher;

/// Fetch backend chosen from configuration at startup.
///
/// Documents come from the site root on disk unless a base URL is
/// configured, in which case they are requested over HTTP.
#[derive(Clone, Debug)]
pub enum SourceFetcher {
    /// Read documents from a directory.
    Fs(FsFetcher),
    /// Request documents from a static-file server.
    Http(HttpFetcher),
}

impl SourceFetcher {
    /// Select a backend: HTTP when `base_url` is set, filesystem otherwise.
    #[must_use]
    pub fn select(root: impl Into<PathBuf>, base_url: Option<&str>, timeout: Duration) -> Self {
        match base_url {
            Some(url) => Self::Http(HttpFetcher::with_timeout(url, timeout)),
            None => Self::Fs(FsFetcher::new(root)),
        }
    }

    /// Human-readable description of where documents come from.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Fs(fs) => fs.root().display().to_string(),
            Self::Http(http) => http.base_url().to_owned(),
        }
    }
}

impl Fetcher for SourceFetcher {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        match self {
            Self::Fs(fs) => fs.fetch(locator).await,
            Self::Http(http) => http.fetch(locator).await,
        }
    }
}
