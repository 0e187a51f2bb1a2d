//! Shared navigation/footer document model.

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::yaml::{ParseError, parse_yaml, scalar_text};

/// Site-wide settings from the navigation document.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteInfo {
    /// Site-wide entity name.
    pub name: Option<String>,
}

/// One navigation menu entry.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NavEntry {
    /// Link text.
    pub label: String,
    /// Link target.
    pub url: String,
}

impl NavEntry {
    /// Entry from a raw list item. Items without a `url` are skipped; the
    /// label defaults to the url.
    fn from_item(item: &Value) -> Option<Self> {
        let url = item.get("url").and_then(scalar_text).filter(|s| !s.is_empty())?;
        let label = item
            .get("label")
            .and_then(scalar_text)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| url.clone());
        Some(Self { label, url })
    }
}

/// Navigation entries that tolerate malformed items.
fn lenient_entries<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<NavEntry>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_sequence()
        .map(|items| items.iter().filter_map(NavEntry::from_item).collect())
        .unwrap_or_default())
}

/// Footer fields from the navigation document.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FooterInfo {
    /// Legal entity name shown in the footer.
    pub entity_name: Option<String>,
    /// State the entity is registered in.
    pub state_of_registration: Option<String>,
    /// Short form of `state_of_registration`.
    pub state: Option<String>,
    /// Public business contact address.
    pub business_email: Option<String>,
    copyright_year: Option<Value>,
}

impl FooterInfo {
    /// Copyright year as text; YAML integers and strings are both accepted.
    pub fn copyright_year(&self) -> Option<String> {
        self.copyright_year.as_ref().and_then(scalar_text)
    }

    /// Registration state, preferring the long field over the short one.
    pub fn registration_state(&self) -> Option<&str> {
        non_empty(self.state_of_registration.as_deref()).or(non_empty(self.state.as_deref()))
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Shared navigation/footer document.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationDocument {
    /// Site-wide settings.
    pub site: SiteInfo,
    /// Navigation menu entries; empty keeps the shell's default links.
    #[serde(deserialize_with = "lenient_entries")]
    pub navigation: Vec<NavEntry>,
    /// Footer fields.
    pub footer: FooterInfo,
}

impl NavigationDocument {
    /// Parse a navigation document from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the text is empty, not valid YAML, or does
    /// not match the document shape.
    pub fn from_yaml(content: &str) -> Result<Self, ParseError> {
        parse_yaml(content)
    }
}
