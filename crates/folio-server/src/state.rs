//! Application state.
//!
//! Shared state for all request handlers.

use std::path::PathBuf;

use folio_site::Site;

/// Application state shared across all handlers.
pub struct AppState<F> {
    /// Page loads.
    pub site: Site<F>,
    /// Static site root for files served as-is.
    pub root: PathBuf,
}
