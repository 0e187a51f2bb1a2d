//! Page view model.
//!
//! [`PageView`] is the mutable page a load writes into: document title and
//! description, the content root, navigation links and footer slots. The
//! content chain owns the title, description and content root; the chrome
//! chain owns navigation links and footer slots.

use folio_content::NavEntry;

use crate::assembler::AssemblyState;
use crate::nav;

/// Content root (`<main id="content">`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentRoot {
    /// Inner markup.
    pub html: String,
    /// Loading state exposed as `aria-busy`.
    pub busy: bool,
    /// Current state of the content chain.
    pub state: AssemblyState,
}

impl Default for ContentRoot {
    fn default() -> Self {
        Self {
            html: String::new(),
            busy: true,
            state: AssemblyState::Idle,
        }
    }
}

/// Navigation link (`a.nav-link`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Link target as written.
    pub href: String,
    /// Link text.
    pub label: String,
    /// Whether the link points at the current page.
    pub active: bool,
}

impl From<&NavEntry> for NavLink {
    fn from(entry: &NavEntry) -> Self {
        Self {
            href: entry.url.clone(),
            label: entry.label.clone(),
            active: false,
        }
    }
}

/// Footer slots. `None` slots are not rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Footer {
    pub entity_name: String,
    pub state: Option<String>,
    pub email: Option<String>,
    pub copyright: Option<String>,
}

/// Page being loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    /// Requested location path, as given.
    pub location: String,
    /// Document title.
    pub title: String,
    /// Meta description.
    pub description: Option<String>,
    /// Content root.
    pub content: ContentRoot,
    /// Navigation links in display order.
    pub nav_links: Vec<NavLink>,
    /// Footer slots.
    pub footer: Footer,
}

impl PageView {
    /// Fresh view for `location` with the shell defaults.
    pub fn new(location: impl Into<String>, site_name: &str, nav: &[NavEntry]) -> Self {
        Self {
            location: location.into(),
            title: site_name.to_owned(),
            description: None,
            content: ContentRoot::default(),
            nav_links: nav.iter().map(NavLink::from).collect(),
            footer: Footer {
                entity_name: site_name.to_owned(),
                ..Footer::default()
            },
        }
    }

    /// Recompute the active flag of every navigation link for this location.
    pub fn mark_active_links(&mut self) {
        nav::mark_active(&mut self.nav_links, &self.location);
    }
}
