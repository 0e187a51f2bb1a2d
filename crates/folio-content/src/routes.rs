//! Content map: canonical page path to document locator.

use std::collections::BTreeMap;

use crate::path::normalize;

/// Locator of the shared navigation/footer document.
pub const DEFAULT_NAVIGATION_LOCATOR: &str = "content/navigation.yml";

/// Canonical path of the legal index page.
pub const LEGAL_INDEX_PATH: &str = "/legal";

/// Routes shipped with the site.
const BUILTIN_ROUTES: &[(&str, &str)] = &[
    ("/", "content/home.yml"),
    ("/about", "content/about.yml"),
    ("/services", "content/services.yml"),
    ("/team", "content/team.yml"),
    ("/contact", "content/contact.yml"),
    ("/legal", "content/legal/index.yml"),
    ("/legal/privacy", "content/legal/privacy.yml"),
    ("/legal/terms", "content/legal/terms.yml"),
    ("/legal/imprint", "content/legal/imprint.yml"),
];

/// Fixed mapping from canonical path to content document locator.
///
/// Keys are always stored in normalized form, so [`resolve`](Self::resolve)
/// is a plain exact-match lookup: no prefixes, no wildcards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentMap {
    routes: BTreeMap<String, String>,
}

impl ContentMap {
    /// Create an empty content map.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            routes: BTreeMap::new(),
        }
    }

    /// Content map with the built-in routes.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_ROUTES.iter().copied().collect()
    }

    /// Add a route, normalizing its path.
    pub fn insert(&mut self, path: &str, locator: impl Into<String>) {
        self.routes.insert(normalize(path), locator.into());
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_route(mut self, path: &str, locator: impl Into<String>) -> Self {
        self.insert(path, locator);
        self
    }

    /// Look up the locator for an already-normalized path.
    pub fn resolve(&self, normalized: &str) -> Option<&str> {
        self.routes.get(normalized).map(String::as_str)
    }

    /// Iterate over `(path, locator)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the map has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for ContentMap {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<P: AsRef<str>, L: Into<String>> FromIterator<(P, L)> for ContentMap {
    fn from_iter<I: IntoIterator<Item = (P, L)>>(iter: I) -> Self {
        let mut map = Self::empty();
        for (path, locator) in iter {
            map.insert(path.as_ref(), locator);
        }
        map
    }
}
