//! Page assembler: the content chain of a page load.
//!
//! Resolves the view's location to a content document, fetches and parses
//! it, then replaces the content root with the rendered sections. Every run
//! ends in one of the terminal states of [`AssemblyState`] with the content
//! root no longer busy.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use folio_content::{ContentDocument, ContentMap, ParseError};
use folio_fetch::{FetchError, Fetcher};
use folio_renderer::render_sections;

use crate::nav::canonical_path;
use crate::view::PageView;

/// Content root markup when the location has no content document.
pub const NOT_FOUND_HTML: &str = concat!(
    r#"<section class="section section--not-found">"#,
    r#"<h1 class="page-header__heading">Page Not Found</h1>"#,
    r#"<p class="statement__body">The page you are looking for does not exist.</p>"#,
    "</section>\n",
);

/// Content root markup when the content document could not be loaded.
pub const FAILURE_HTML: &str = concat!(
    r#"<section class="section section--error">"#,
    r#"<p class="statement__body">Sorry, the content could not be loaded. Please try again later.</p>"#,
    "</section>\n",
);

/// State of the content chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AssemblyState {
    #[default]
    Idle,
    Resolving,
    Fetching,
    Rendering,
    /// Content replaced with the rendered document.
    Rendered,
    /// No content document for the location.
    NotFound,
    /// Fetch or parse failed.
    Failed,
}

/// Error that ends the content chain in [`AssemblyState::Failed`].
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Content document could not be fetched.
    #[error("Content fetch failed: {0}")]
    Fetch(#[from] FetchError),
    /// Content document text is not a valid document.
    #[error("Content document {locator} is invalid: {source}")]
    Parse {
        locator: String,
        #[source]
        source: ParseError,
    },
}

/// Content chain configuration borrowed from the site.
pub(crate) struct Assembler<'a, F> {
    pub(crate) fetcher: &'a F,
    pub(crate) routes: &'a ContentMap,
    pub(crate) site_name: &'a str,
    pub(crate) timeout: Duration,
}

impl<F: Fetcher> Assembler<'_, F> {
    /// Run the content chain against `view` and return its terminal state.
    pub(crate) async fn run(&self, view: &Mutex<PageView>) -> AssemblyState {
        let location = {
            let mut view = lock(view);
            view.content.state = AssemblyState::Resolving;
            view.location.clone()
        };

        let path = canonical_path(&location);
        let Some(locator) = self.routes.resolve(&path) else {
            tracing::debug!(path = %path, "No content document for path");
            settle(view, NOT_FOUND_HTML.to_owned(), AssemblyState::NotFound);
            return AssemblyState::NotFound;
        };

        lock(view).content.state = AssemblyState::Fetching;
        let doc = match self.load(locator).await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::error!(path = %path, locator, error = %e, "Failed to load page content");
                settle(view, FAILURE_HTML.to_owned(), AssemblyState::Failed);
                return AssemblyState::Failed;
            }
        };

        lock(view).content.state = AssemblyState::Rendering;
        let meta = doc.meta();
        let html = render_sections(doc.sections());

        let mut view = lock(view);
        if let Some(title) = meta.title {
            view.title = format!("{title} — {}", self.site_name);
        }
        if let Some(description) = meta.description {
            view.description = Some(description);
        }
        view.content.html = html;
        view.content.busy = false;
        view.content.state = AssemblyState::Rendered;
        view.mark_active_links();

        tracing::debug!(path = %path, locator, sections = doc.sections().len(), "Rendered page");
        AssemblyState::Rendered
    }

    async fn load(&self, locator: &str) -> Result<ContentDocument, PageError> {
        let text = tokio::time::timeout(self.timeout, self.fetcher.fetch(locator))
            .await
            .map_err(|_| FetchError::timeout(locator))??;

        ContentDocument::from_yaml(&text).map_err(|source| PageError::Parse {
            locator: locator.to_owned(),
            source,
        })
    }
}

/// Lock the view. The view holds plain data, so a poisoned lock is still usable.
pub(crate) fn lock(view: &Mutex<PageView>) -> std::sync::MutexGuard<'_, PageView> {
    view.lock().unwrap_or_else(PoisonError::into_inner)
}

fn settle(view: &Mutex<PageView>, html: String, state: AssemblyState) {
    let mut view = lock(view);
    view.content.html = html;
    view.content.busy = false;
    view.content.state = state;
}

#[cfg(test)]
mod tests {
    use folio_fetch::MockFetcher;
    use pretty_assertions::assert_eq;

    use super::*;

    const SITE: &str = "Nilüfer Ormanlı Studio LLC";

    fn assembler<'a>(fetcher: &'a MockFetcher, routes: &'a ContentMap) -> Assembler<'a, MockFetcher> {
        Assembler {
            fetcher,
            routes,
            site_name: SITE,
            timeout: Duration::from_secs(5),
        }
    }

    fn view(location: &str) -> Mutex<PageView> {
        Mutex::new(PageView::new(location, SITE, &[]))
    }

    #[tokio::test]
    async fn test_root_renders_home_document() {
        let fetcher = MockFetcher::new().with_document(
            "content/home.yml",
            "meta:\n  title: Home\n  description: Studio home\nsections:\n  - type: hero\n    heading: Hi\n",
        );
        let routes = ContentMap::builtin();
        let view = view("/");

        let state = assembler(&fetcher, &routes).run(&view).await;

        let view = view.into_inner().unwrap();
        assert_eq!(state, AssemblyState::Rendered);
        assert_eq!(view.content.state, AssemblyState::Rendered);
        assert_eq!(view.title, "Home — Nilüfer Ormanlı Studio LLC");
        assert_eq!(view.description.as_deref(), Some("Studio home"));
        assert!(!view.content.busy);
        assert!(view.content.html.contains(r#"<h1 class="hero__heading">Hi</h1>"#));
        assert_eq!(fetcher.fetch_count("content/home.yml"), 1);
    }

    #[tokio::test]
    async fn test_missing_meta_keeps_shell_title() {
        let fetcher = MockFetcher::new().with_document("content/about.yml", "sections: []\n");
        let routes = ContentMap::builtin();
        let view = view("/About/");

        let state = assembler(&fetcher, &routes).run(&view).await;

        let view = view.into_inner().unwrap();
        assert_eq!(state, AssemblyState::Rendered);
        assert_eq!(view.title, SITE);
        assert_eq!(view.description, None);
        assert_eq!(view.content.html, "");
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found_without_fetch() {
        let fetcher = MockFetcher::new();
        let routes = ContentMap::builtin();
        let view = view("/unknown-page");

        let state = assembler(&fetcher, &routes).run(&view).await;

        let view = view.into_inner().unwrap();
        assert_eq!(state, AssemblyState::NotFound);
        assert_eq!(view.content.html, NOT_FOUND_HTML);
        assert!(!view.content.busy);
        assert_eq!(fetcher.total_fetches(), 0);
    }

    #[tokio::test]
    async fn test_server_error_fails_and_skips_nav_marking() {
        let fetcher = MockFetcher::new().with_status("content/about.yml", 500);
        let routes = ContentMap::builtin();
        let view = Mutex::new(PageView::new(
            "/about",
            SITE,
            &[folio_content::NavEntry {
                label: "About".to_owned(),
                url: "/about".to_owned(),
            }],
        ));

        let state = assembler(&fetcher, &routes).run(&view).await;

        let view = view.into_inner().unwrap();
        assert_eq!(state, AssemblyState::Failed);
        assert_eq!(view.content.html, FAILURE_HTML);
        assert!(!view.content.busy);
        assert!(!view.nav_links[0].active);
    }

    #[tokio::test]
    async fn test_parse_failure_fails() {
        let fetcher = MockFetcher::new().with_document("content/team.yml", "sections: [unclosed");
        let routes = ContentMap::builtin();
        let view = view("/team");

        let state = assembler(&fetcher, &routes).run(&view).await;

        assert_eq!(state, AssemblyState::Failed);
        assert_eq!(view.into_inner().unwrap().content.html, FAILURE_HTML);
    }

    #[tokio::test]
    async fn test_empty_document_fails() {
        let fetcher = MockFetcher::new().with_document("content/team.yml", "");
        let routes = ContentMap::builtin();

        let state = assembler(&fetcher, &routes).run(&view("/team")).await;

        assert_eq!(state, AssemblyState::Failed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_fetch_times_out() {
        let fetcher = MockFetcher::new().with_hang("content/contact.yml");
        let routes = ContentMap::builtin();
        let view = view("/contact");

        let state = assembler(&fetcher, &routes).run(&view).await;

        let view = view.into_inner().unwrap();
        assert_eq!(state, AssemblyState::Failed);
        assert!(!view.content.busy);
        assert_eq!(view.content.html, FAILURE_HTML);
    }

    #[tokio::test]
    async fn test_same_document_renders_identically() {
        let text = "meta:\n  title: Terms\nsections:\n  - type: legal-document\n    body: <p>x</p>\n";
        let fetcher = MockFetcher::new().with_document("content/legal/terms.yml", text);
        let routes = ContentMap::builtin();

        let first = view("/legal/terms");
        let second = view("/legal/terms/");
        assembler(&fetcher, &routes).run(&first).await;
        assembler(&fetcher, &routes).run(&second).await;

        assert_eq!(
            first.into_inner().unwrap().content.html,
            second.into_inner().unwrap().content.html
        );
    }

    #[tokio::test]
    async fn test_query_and_fragment_ignored_for_resolution() {
        let fetcher = MockFetcher::new()
            .with_document("content/about.yml", "meta:\n  title: About\nsections: []\n");
        let routes = ContentMap::builtin();
        let view = Mutex::new(PageView::new(
            "/About/?ref=x#team",
            SITE,
            &[folio_content::NavEntry {
                label: "About".to_owned(),
                url: "/about".to_owned(),
            }],
        ));

        let state = assembler(&fetcher, &routes).run(&view).await;

        let view = view.into_inner().unwrap();
        assert_eq!(state, AssemblyState::Rendered);
        assert_eq!(view.title, "About — Nilüfer Ormanlı Studio LLC");
        assert!(view.nav_links[0].active);
        assert_eq!(fetcher.fetch_count("content/about.yml"), 1);
    }

    #[test]
    fn test_page_error_display() {
        let err = PageError::from(FetchError::status(500, "content/about.yml"));
        assert!(err.to_string().starts_with("Content fetch failed: "));
    }
}
