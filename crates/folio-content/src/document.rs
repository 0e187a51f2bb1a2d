//! Content document model.
//!
//! A content document is `{ meta, sections }`. Sections are heterogeneous by
//! `type` and are kept as raw YAML mappings: field access is lenient, so a
//! section with missing or oddly-typed fields still renders instead of
//! failing the whole document.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::yaml::{ParseError, is_truthy, parse_yaml, scalar_text};

/// Document-level metadata.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PageMeta {
    /// Page title (combined with the site name for the document title).
    pub title: Option<String>,
    /// Page description for the `<meta name="description">` tag.
    pub description: Option<String>,
}

/// Per-page content document.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentDocument {
    meta: Option<PageMeta>,
    sections: Option<Vec<Section>>,
}

impl ContentDocument {
    /// Parse a content document from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the text is empty, not valid YAML, or its
    /// top level is not a mapping.
    pub fn from_yaml(content: &str) -> Result<Self, ParseError> {
        parse_yaml(content)
    }

    /// Document metadata; empty when the document has no `meta` key.
    pub fn meta(&self) -> PageMeta {
        self.meta.clone().unwrap_or_default()
    }

    /// Sections in document order.
    pub fn sections(&self) -> &[Section] {
        self.sections.as_deref().unwrap_or_default()
    }
}

/// One typed, renderable unit of a content document.
///
/// Wraps the section's YAML mapping. Entries that are not mappings become
/// empty sections, which the fallback renderer handles.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(from = "Value")]
pub struct Section {
    fields: Mapping,
}

impl From<Value> for Section {
    fn from(value: Value) -> Self {
        match value {
            Value::Mapping(fields) => Self { fields },
            Value::Tagged(tagged) => Self::from(tagged.value),
            _ => Self::default(),
        }
    }
}

impl Section {
    /// Declared section type, if it is a string.
    pub fn kind(&self) -> Option<&str> {
        self.fields.get("type").and_then(Value::as_str)
    }

    /// Element identifier.
    pub fn id(&self) -> Option<String> {
        self.text("id")
    }

    /// Section label (rendered as a heading by list-bearing types).
    pub fn label(&self) -> Option<String> {
        self.text("label")
    }

    /// Textual value of a scalar field.
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields.get(key).and_then(scalar_text)
    }

    /// Truthiness of a flag field; absent fields are false.
    pub fn flag(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(is_truthy)
    }

    /// Items of the `items` sequence in input order.
    ///
    /// A missing or non-sequence `items` field yields no items.
    pub fn items(&self) -> impl Iterator<Item = Item<'_>> {
        self.fields
            .get("items")
            .and_then(Value::as_sequence)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(Item::new)
    }
}

/// Sub-record of a list-bearing section.
#[derive(Clone, Copy, Debug)]
pub struct Item<'a> {
    fields: Option<&'a Mapping>,
}

impl<'a> Item<'a> {
    fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_mapping(),
        }
    }

    /// Textual value of a scalar field.
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields?.get(key).and_then(scalar_text)
    }
}
