//! Page loads for Folio.
//!
//! This crate provides:
//! - [`Site`]: runs page loads against a [`folio_fetch::Fetcher`]
//! - [`PageView`]: the page a load writes into, serialized by [`PageView::to_html`]
//! - [`AssemblyState`]: states of the content chain
//! - [`SiteChrome`]: single-flight navigation/footer loader
//!
//! A page load runs two independent chains on one task. The content chain
//! resolves the location, fetches and renders its content document. The
//! chrome chain fetches the shared navigation document and fills in
//! navigation links and footer slots. A failure in one chain does not affect
//! the other.

mod assembler;
mod chrome;
pub mod nav;
mod shell;
mod site;
mod view;

pub use assembler::{AssemblyState, FAILURE_HTML, NOT_FOUND_HTML, PageError};
pub use chrome::{ChromeError, SiteChrome, footer_for};
pub use site::{DEFAULT_FETCH_TIMEOUT, PageLoad, Site, SiteConfig};
pub use view::{ContentRoot, Footer, NavLink, PageView};
