//! HTTP fetcher.
//!
//! Provides [`HttpFetcher`] for reading documents from the site's own
//! static-file server, the way a browser page fetches its content.

use std::time::Duration;

use ureq::Agent;

use crate::error::{FetchError, FetchErrorKind};
use crate::fetcher::Fetcher;

/// Backend identifier for error messages.
const BACKEND: &str = "Http";

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// HTTP fetcher.
///
/// Issues `GET <base_url>/<locator>` requests with a blocking `ureq` agent
/// on tokio's blocking pool. Any status `>= 400` is reported as
/// [`FetchErrorKind::Status`].
#[derive(Clone)]
pub struct HttpFetcher {
    agent: Agent,
    base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher for `base_url` with the default timeout.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT))
    }

    /// Create a fetcher for `base_url` with a custom request timeout.
    #[must_use]
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            agent: create_agent(timeout),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Base URL documents are fetched from.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for a locator.
    fn url_for(&self, locator: &str) -> String {
        format!("{}/{}", self.base_url, locator.trim_start_matches('/'))
    }
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Create a `ureq` agent that reports HTTP error statuses as responses.
fn create_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// Perform a blocking GET and return the body text.
fn get_text(agent: &Agent, url: &str, locator: &str) -> Result<String, FetchError> {
    let response = agent
        .get(url)
        .header("Accept", "application/yaml, text/yaml, text/plain;q=0.9, */*;q=0.1")
        .call()
        .map_err(|e| transport_error(e, locator))?;

    let status = response.status().as_u16();
    if status >= 400 {
        return Err(FetchError::status(status, locator).with_backend(BACKEND));
    }

    response
        .into_body()
        .read_to_string()
        .map_err(|e| transport_error(e, locator))
}

fn transport_error(err: ureq::Error, locator: &str) -> FetchError {
    let kind = match &err {
        ureq::Error::Timeout(_) => FetchErrorKind::Timeout,
        ureq::Error::Io(_) | ureq::Error::ConnectionFailed | ureq::Error::HostNotFound => {
            FetchErrorKind::Unavailable
        }
        _ => FetchErrorKind::Other,
    };
    FetchError::new(kind)
        .with_locator(locator)
        .with_backend(BACKEND)
        .with_source(err)
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        let url = self.url_for(locator);
        tracing::debug!(locator, url = %url, "Requesting document");

        let agent = self.agent.clone();
        let owned_locator = locator.to_owned();
        tokio::task::spawn_blocking(move || get_text(&agent, &url, &owned_locator))
            .await
            .map_err(|e| {
                FetchError::new(FetchErrorKind::Other)
                    .with_locator(locator)
                    .with_backend(BACKEND)
                    .with_source(e)
            })?
    }
}
