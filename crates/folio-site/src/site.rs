//! Page loads.
//!
//! [`Site`] holds everything a page load needs that outlives it: the fetch
//! backend, the content map and the shell defaults. Each call to
//! [`Site::load`] builds a fresh [`PageView`] and runs the content chain and
//! the chrome chain against it concurrently on the current task.
//!
//! # Example
//!
//! ```ignore
//! use folio_fetch::FsFetcher;
//! use folio_site::{Site, SiteConfig};
//!
//! let site = Site::new(FsFetcher::new("public"), SiteConfig::default());
//! let page = site.load("/about").await;
//! println!("{}", page.view.to_html());
//! ```

use std::sync::Mutex;
use std::time::Duration;

use folio_content::{ContentMap, DEFAULT_NAVIGATION_LOCATOR, DEFAULT_SITE_NAME, NavEntry};
use folio_fetch::Fetcher;

use crate::assembler::{Assembler, AssemblyState};
use crate::chrome::SiteChrome;
use crate::view::PageView;

/// Default fetch timeout.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`Site`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Site name: title suffix and last entity-name fallback.
    pub name: String,
    /// Canonical path to content document locator.
    pub routes: ContentMap,
    /// Locator of the shared navigation/footer document.
    pub navigation: String,
    /// Navigation links of the shell before chrome is applied.
    pub nav: Vec<NavEntry>,
    /// Upper bound on each document fetch.
    pub fetch_timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SITE_NAME.to_owned(),
            routes: ContentMap::builtin(),
            navigation: DEFAULT_NAVIGATION_LOCATOR.to_owned(),
            nav: default_nav(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

fn default_nav() -> Vec<NavEntry> {
    [
        ("Home", "/"),
        ("About", "/about"),
        ("Services", "/services"),
        ("Team", "/team"),
        ("Contact", "/contact"),
    ]
    .into_iter()
    .map(|(label, url)| NavEntry {
        label: label.to_owned(),
        url: url.to_owned(),
    })
    .collect()
}

/// Result of a page load.
#[derive(Clone, Debug)]
pub struct PageLoad {
    /// Finished view.
    pub view: PageView,
    /// Terminal state of the content chain.
    pub state: AssemblyState,
    /// Whether the chrome chain applied the navigation document.
    pub chrome_applied: bool,
}

impl PageLoad {
    /// Complete HTML document.
    pub fn to_html(&self) -> String {
        self.view.to_html()
    }
}

/// Site: fetch backend plus page-load configuration.
pub struct Site<F> {
    fetcher: F,
    config: SiteConfig,
}

impl<F: Fetcher> Site<F> {
    /// Create a site over `fetcher`.
    pub fn new(fetcher: F, config: SiteConfig) -> Self {
        Self { fetcher, config }
    }

    /// Site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Fetch backend.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Run a page load for `location`.
    ///
    /// Never fails: content failures end in [`AssemblyState::Failed`] or
    /// [`AssemblyState::NotFound`] with their fragment in the content root,
    /// and chrome failures keep the shell defaults.
    pub async fn load(&self, location: &str) -> PageLoad {
        let view = Mutex::new(PageView::new(location, &self.config.name, &self.config.nav));

        let assembler = Assembler {
            fetcher: &self.fetcher,
            routes: &self.config.routes,
            site_name: &self.config.name,
            timeout: self.config.fetch_timeout,
        };
        let chrome = SiteChrome::new(
            &self.fetcher,
            &self.config.navigation,
            &self.config.name,
            self.config.fetch_timeout,
        );

        let (state, chrome_applied) = tokio::join!(assembler.run(&view), chrome.apply(&view));

        let view = view
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        tracing::info!(location, ?state, chrome_applied, "Page loaded");

        PageLoad {
            view,
            state,
            chrome_applied,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use folio_fetch::MockFetcher;
    use pretty_assertions::assert_eq;

    use super::*;

    const NAV: &str = r#"
site:
  name: Nilüfer Ormanlı Studio
navigation:
  - label: About
    url: /about
  - label: Contact
    url: /contact
footer:
  entity_name: Nilüfer Ormanlı Studio LLC
  state_of_registration: Wyoming
  business_email: hello@studio.example
"#;

    fn site(fetcher: MockFetcher) -> Site<MockFetcher> {
        Site::new(fetcher, SiteConfig::default())
    }

    #[tokio::test]
    async fn test_home_page_title() {
        let fetcher = MockFetcher::new()
            .with_document("content/home.yml", "meta:\n  title: Home\nsections: []\n")
            .with_document("content/navigation.yml", NAV);

        let page = site(fetcher).load("/").await;

        assert_eq!(page.state, AssemblyState::Rendered);
        assert!(page.chrome_applied);
        assert_eq!(page.view.title, "Home — Nilüfer Ormanlı Studio LLC");
    }

    #[tokio::test]
    async fn test_unknown_page_fetches_only_navigation() {
        let site = site(MockFetcher::new().with_document("content/navigation.yml", NAV));

        let page = site.load("/unknown-page").await;

        assert_eq!(page.state, AssemblyState::NotFound);
        assert!(page.to_html().contains("Page Not Found"));
        assert_eq!(site.fetcher().total_fetches(), 1);
        assert_eq!(site.fetcher().fetch_count("content/navigation.yml"), 1);
    }

    #[tokio::test]
    async fn test_content_failure_keeps_nav_unmarked() {
        let fetcher = MockFetcher::new()
            .with_status("content/about.yml", 500)
            .with_document("content/navigation.yml", NAV);

        let page = site(fetcher).load("/about").await;

        assert_eq!(page.state, AssemblyState::Failed);
        assert!(page.chrome_applied);
        assert!(!page.view.content.busy);
        assert!(page.view.nav_links.iter().all(|l| !l.active));
        assert!(page.to_html().contains("could not be loaded"));
    }

    #[tokio::test]
    async fn test_chrome_uses_current_year_without_copyright_year() {
        let fetcher = MockFetcher::new()
            .with_document("content/contact.yml", "sections: []\n")
            .with_document("content/navigation.yml", NAV);

        let page = site(fetcher).load("/contact").await;

        let year = chrono::Local::now().year();
        assert_eq!(
            page.view.footer.copyright,
            Some(format!("© {year} Nilüfer Ormanlı Studio LLC"))
        );
        assert_eq!(page.view.footer.state.as_deref(), Some("Wyoming"));
    }

    #[tokio::test]
    async fn test_nav_marked_regardless_of_chain_order() {
        let fetcher = MockFetcher::new()
            .with_document("content/about.yml", "sections: []\n")
            .with_document("content/navigation.yml", NAV);

        let page = site(fetcher).load("/About/").await;

        let active: Vec<_> = page
            .view
            .nav_links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.href.as_str())
            .collect();
        assert_eq!(active, vec!["/about"]);
    }

    #[tokio::test]
    async fn test_chrome_failure_keeps_shell_defaults() {
        let fetcher = MockFetcher::new()
            .with_document("content/services.yml", "sections: []\n")
            .with_status("content/navigation.yml", 404);

        let page = site(fetcher).load("/services").await;

        assert_eq!(page.state, AssemblyState::Rendered);
        assert!(!page.chrome_applied);
        assert_eq!(page.view.nav_links.len(), 5);
        assert_eq!(page.view.footer.entity_name, DEFAULT_SITE_NAME);
        assert_eq!(page.view.footer.copyright, None);
        assert!(page.view.nav_links.iter().any(|l| l.href == "/services" && l.active));
    }

    #[tokio::test]
    async fn test_location_with_query_renders_and_marks_page() {
        let fetcher = MockFetcher::new()
            .with_document("content/about.yml", "meta:\n  title: About\nsections: []\n")
            .with_document("content/navigation.yml", NAV);

        let page = site(fetcher).load("/about?ref=x").await;

        assert_eq!(page.state, AssemblyState::Rendered);
        let active: Vec<_> = page
            .view
            .nav_links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.href.as_str())
            .collect();
        assert_eq!(active, vec!["/about"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_navigation_does_not_block_page() {
        let fetcher = MockFetcher::new()
            .with_document("content/team.yml", "sections: []\n")
            .with_hang("content/navigation.yml");

        let page = site(fetcher).load("/team").await;

        assert_eq!(page.state, AssemblyState::Rendered);
        assert!(!page.chrome_applied);
    }
}
