//! Fetcher trait.

use std::future::Future;

use crate::error::FetchError;

/// Source of document text addressed by locator.
///
/// A locator is a site-relative path such as `content/home.yml`. Backends
/// decide how a locator maps onto their storage (a file under a root
/// directory, a URL under a base URL, an in-memory table).
///
/// Every call is an independent fetch; backends do not cache. Callers that
/// need at-most-once semantics memoize the result themselves.
pub trait Fetcher: Send + Sync {
    /// Fetch the full text of the document at `locator`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the document is missing, the backend answers
    /// with a non-success status, or the transport fails.
    fn fetch(&self, locator: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}
