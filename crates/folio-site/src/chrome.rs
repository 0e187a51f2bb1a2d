//! Site chrome: the navigation/footer chain of a page load.
//!
//! The shared navigation document is fetched at most once per [`SiteChrome`]
//! value. Concurrent and later callers share the same pending or completed
//! result, including a failure. Chrome failures are logged and leave the
//! shell defaults in place.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Datelike;
use folio_content::{NavigationDocument, ParseError};
use folio_fetch::{FetchError, Fetcher};
use tokio::sync::OnceCell;

use crate::assembler::{AssemblyState, lock};
use crate::view::{Footer, NavLink, PageView};

/// Error loading the navigation document.
#[derive(Debug, thiserror::Error)]
pub enum ChromeError {
    /// Navigation document could not be fetched.
    #[error("Navigation fetch failed: {0}")]
    Fetch(#[from] FetchError),
    /// Navigation document text is not a valid document.
    #[error("Navigation document {locator} is invalid: {source}")]
    Parse {
        locator: String,
        #[source]
        source: ParseError,
    },
}

type Memo = Result<Arc<NavigationDocument>, Arc<ChromeError>>;

/// Single-flight loader and applier of the navigation document.
pub struct SiteChrome<'a, F> {
    fetcher: &'a F,
    locator: &'a str,
    default_name: &'a str,
    timeout: Duration,
    document: OnceCell<Memo>,
}

impl<'a, F: Fetcher> SiteChrome<'a, F> {
    /// Create a chrome loader for the document at `locator`.
    ///
    /// `default_name` is the entity name used when the document names none.
    pub fn new(fetcher: &'a F, locator: &'a str, default_name: &'a str, timeout: Duration) -> Self {
        Self {
            fetcher,
            locator,
            default_name,
            timeout,
            document: OnceCell::new(),
        }
    }

    /// The navigation document, fetched on first call.
    pub async fn document(&self) -> Memo {
        self.document
            .get_or_init(|| async { self.load().await.map(Arc::new).map_err(Arc::new) })
            .await
            .clone()
    }

    /// Apply navigation links and footer slots to `view`.
    ///
    /// Returns whether the document was applied.
    pub async fn apply(&self, view: &Mutex<PageView>) -> bool {
        let doc = match self.document().await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::error!(locator = self.locator, error = %e, "Failed to load site chrome");
                return false;
            }
        };

        let footer = footer_for(&doc, self.default_name, current_year());

        let mut view = lock(view);
        if !doc.navigation.is_empty() {
            view.nav_links = doc.navigation.iter().map(NavLink::from).collect();
        }
        view.footer = footer;
        // Links inserted after the content chain finished still need marking.
        if view.content.state == AssemblyState::Rendered {
            view.mark_active_links();
        }
        true
    }

    async fn load(&self) -> Result<NavigationDocument, ChromeError> {
        let text = tokio::time::timeout(self.timeout, self.fetcher.fetch(self.locator))
            .await
            .map_err(|_| FetchError::timeout(self.locator))??;

        NavigationDocument::from_yaml(&text).map_err(|source| ChromeError::Parse {
            locator: self.locator.to_owned(),
            source,
        })
    }
}

/// Footer slots for a navigation document.
pub fn footer_for(doc: &NavigationDocument, default_name: &str, current_year: i32) -> Footer {
    let entity_name = non_empty(doc.footer.entity_name.as_deref())
        .or(non_empty(doc.site.name.as_deref()))
        .unwrap_or(default_name)
        .to_owned();
    let year = doc
        .footer
        .copyright_year()
        .filter(|y| !y.is_empty())
        .unwrap_or_else(|| current_year.to_string());

    Footer {
        copyright: Some(format!("© {year} {entity_name}")),
        state: doc.footer.registration_state().map(str::to_owned),
        email: non_empty(doc.footer.business_email.as_deref()).map(str::to_owned),
        entity_name,
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}
