//! Static file serving from the site root.

use std::path::Path;

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// Whether a request path names a file rather than a page.
///
/// A path is a file path when its last segment has an extension, so
/// `/assets/site.css` and `/content/home.yml` are files and `/legal/terms`
/// is a page.
pub(crate) fn is_file_path(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .and_then(|segment| segment.rsplit_once('.'))
        .is_some_and(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
}

/// Serve a request from `root`. Missing files are `404 Not Found`.
pub(crate) async fn serve(root: &Path, req: Request<Body>) -> Response {
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => res.into_response(),
        Err(never) => match never {},
    }
}
