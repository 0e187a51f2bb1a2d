//! Document fetching for the Folio content renderer.
//!
//! This crate provides a [`Fetcher`] trait for loading document text by
//! site-relative locator. It decouples the rendering pipeline from where the
//! static site lives:
//!
//! - [`FsFetcher`] reads from a site root directory
//! - [`HttpFetcher`] requests documents from a static-file server
//! - [`SourceFetcher`] picks one of the two from configuration
//! - [`MockFetcher`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use folio_fetch::{Fetcher, FsFetcher};
//!
//! let fetcher = FsFetcher::new("public");
//! let text = fetcher.fetch("content/home.yml").await?;
//! ```

mod error;
mod fetcher;
mod fs;
mod http;
#[cfg(feature = "mock")]
mod mock;
mod source;

pub use error::{FetchError, FetchErrorKind};
pub use fetcher::Fetcher;
pub use fs::FsFetcher;
pub use http::HttpFetcher;
#[cfg(feature = "mock")]
pub use mock::MockFetcher;
pub use source::SourceFetcher;
