//! Filesystem fetcher.
//!
//! Provides [`FsFetcher`] for reading documents from a static site root on
//! the local filesystem.

use std::path::{Component, Path, PathBuf};

use crate::error::{FetchError, FetchErrorKind};
use crate::fetcher::Fetcher;

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem fetcher.
///
/// Resolves locators against a site root directory. Locators may carry a
/// leading slash (`/content/home.yml`); they may not leave the root.
///
/// # Example
///
/// ```ignore
/// use folio_fetch::{Fetcher, FsFetcher};
///
/// let fetcher = FsFetcher::new("public");
/// let text = fetcher.fetch("content/home.yml").await?;
/// ```
#[derive(Clone, Debug)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    /// Create a fetcher rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Site root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a locator onto a file path under the root.
    ///
    /// Only plain path segments are accepted; `..`, drive prefixes and empty
    /// locators are rejected.
    fn resolve(&self, locator: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(locator.trim_start_matches('/'));
        let mut resolved = self.root.clone();
        let mut segments = 0usize;

        for component in relative.components() {
            match component {
                Component::Normal(segment) => {
                    resolved.push(segment);
                    segments += 1;
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid_locator(locator));
                }
            }
        }

        if segments == 0 {
            return Err(invalid_locator(locator));
        }

        Ok(resolved)
    }
}

fn invalid_locator(locator: &str) -> FetchError {
    FetchError::new(FetchErrorKind::InvalidLocator)
        .with_locator(locator)
        .with_backend(BACKEND)
}

impl Fetcher for FsFetcher {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        let path = self.resolve(locator)?;
        tracing::debug!(locator, path = %path.display(), "Reading document");

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| FetchError::io(e, locator).with_backend(BACKEND))
    }
}
