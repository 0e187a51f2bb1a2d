//! Mock fetcher implementation for testing.
//!
//! Provides [`MockFetcher`] for unit testing without filesystem or network
//! access. Every fetch is counted per locator so tests can assert how many
//! round-trips a pipeline issued.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::error::{FetchError, FetchErrorKind};
use crate::fetcher::Fetcher;

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock fetcher for testing.
///
/// Stores documents in memory. Use the builder methods to configure the mock
/// with test data.
///
/// # Example
///
/// ```ignore
/// use folio_fetch::{Fetcher, MockFetcher};
///
/// let fetcher = MockFetcher::new()
///     .with_document("content/home.yml", "meta:\n  title: Home\n")
///     .with_status("content/about.yml", 500);
///
/// let text = fetcher.fetch("content/home.yml").await?;
/// assert_eq!(fetcher.fetch_count("content/home.yml"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockFetcher {
    documents: RwLock<HashMap<String, String>>,
    failures: RwLock<HashMap<String, FetchErrorKind>>,
    hanging: RwLock<HashSet<String>>,
    calls: RwLock<HashMap<String, usize>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `text` for `locator`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_document(self, locator: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents
            .write()
            .unwrap()
            .insert(locator.into(), text.into());
        self
    }

    /// Answer `locator` with a non-success HTTP status.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_status(self, locator: impl Into<String>, status: u16) -> Self {
        self.with_failure(locator, FetchErrorKind::Status(status))
    }

    /// Fail `locator` with the given error kind.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, locator: impl Into<String>, kind: FetchErrorKind) -> Self {
        self.failures.write().unwrap().insert(locator.into(), kind);
        self
    }

    /// Never complete fetches of `locator`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_hang(self, locator: impl Into<String>) -> Self {
        self.hanging.write().unwrap().insert(locator.into());
        self
    }

    /// Number of fetches issued for `locator`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn fetch_count(&self, locator: &str) -> usize {
        self.calls
            .read()
            .unwrap()
            .get(locator)
            .copied()
            .unwrap_or(0)
    }

    /// Number of fetches issued for any locator.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn total_fetches(&self) -> usize {
        self.calls.read().unwrap().values().sum()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        *self
            .calls
            .write()
            .unwrap()
            .entry(locator.to_owned())
            .or_insert(0) += 1;

        // Give concurrent callers a chance to interleave like a real fetch would.
        tokio::task::yield_now().await;

        let hangs = self.hanging.read().unwrap().contains(locator);
        if hangs {
            std::future::pending::<()>().await;
        }

        let failure = self.failures.read().unwrap().get(locator).copied();
        if let Some(kind) = failure {
            return Err(FetchError::new(kind)
                .with_locator(locator)
                .with_backend(BACKEND));
        }

        let document = self.documents.read().unwrap().get(locator).cloned();
        document.ok_or_else(|| FetchError::not_found(locator).with_backend(BACKEND))
    }
}
