//! Content documents, path normalization and routing for Folio.
//!
//! This crate provides the data side of the rendering pipeline:
//! - [`normalize`]: canonical form of a location path
//! - [`ContentMap`]: exact-match routing from canonical path to document locator
//! - [`ContentDocument`] / [`Section`] / [`Item`]: per-page content
//! - [`NavigationDocument`]: shared navigation and footer settings
//!
//! # Example
//!
//! ```
//! use folio_content::{ContentDocument, ContentMap, normalize};
//!
//! let map = ContentMap::builtin();
//! let locator = map.resolve(&normalize("/About/"));
//! assert_eq!(locator, Some("content/about.yml"));
//!
//! let doc = ContentDocument::from_yaml("meta:\n  title: About\nsections: []\n").unwrap();
//! assert_eq!(doc.meta().title.as_deref(), Some("About"));
//! ```

mod document;
mod navigation;
mod path;
mod routes;
mod yaml;

pub use document::{ContentDocument, Item, PageMeta, Section};
pub use navigation::{FooterInfo, NavEntry, NavigationDocument, SiteInfo};
pub use path::{ROOT_PATH, is_normalized, normalize};
pub use routes::{ContentMap, DEFAULT_NAVIGATION_LOCATOR, LEGAL_INDEX_PATH};
pub use yaml::ParseError;

/// Site name used for the title suffix and as the last entity-name fallback.
pub const DEFAULT_SITE_NAME: &str = "Nilüfer Ormanlı Studio LLC";
