//! Section renderer registry producing HTML fragments.
//!
//! Content documents carry an ordered list of typed sections. This crate maps
//! each section to a markup fragment:
//! - [`SectionKind`]: the closed set of registered section types
//! - [`render_section`] / [`render_sections`]: dispatch by declared type, with
//!   a generic fallback for unregistered types
//! - [`escape_html`]: the escaping applied to all interpolated text
//!
//! Every text field is escaped. Two values are written verbatim: the `body` of
//! a `legal-document` section and link destinations (`url`/`href`).
//!
//! # Example
//!
//! ```
//! use folio_content::ContentDocument;
//! use folio_renderer::render_sections;
//!
//! let doc = ContentDocument::from_yaml(
//!     "sections:\n  - type: hero\n    heading: Welcome\n",
//! )
//! .unwrap();
//!
//! let html = render_sections(doc.sections());
//! assert_eq!(
//!     html,
//!     "<section class=\"section section--hero\"><h1 class=\"hero__heading\">Welcome</h1></section>\n"
//! );
//! ```

mod escape;
mod html;
mod registry;
mod rules;

pub use escape::escape_html;
pub use registry::{SectionKind, render_section, render_sections};
