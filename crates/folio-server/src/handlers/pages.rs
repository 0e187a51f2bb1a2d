//! Page endpoint.
//!
//! Every request path without a file extension is a page load. The response
//! body is always the full HTML document; the status reflects how the
//! content chain ended.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use folio_fetch::Fetcher;
use folio_site::AssemblyState;

use crate::state::AppState;
use crate::static_files;

/// Handle any request: static file or page load.
pub(crate) async fn get_page<F: Fetcher + 'static>(
    State(state): State<Arc<AppState<F>>>,
    req: Request<Body>,
) -> Response {
    if !matches!(*req.method(), Method::GET | Method::HEAD) {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET, HEAD")],
        )
            .into_response();
    }

    let path = req.uri().path().to_owned();
    if static_files::is_file_path(&path) {
        return static_files::serve(&state.root, req).await;
    }

    let page = state.site.load(&path).await;
    (status_for(page.state), Html(page.to_html())).into_response()
}

/// HTTP status for a finished content chain.
fn status_for(state: AssemblyState) -> StatusCode {
    match state {
        AssemblyState::Rendered => StatusCode::OK,
        AssemblyState::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    }
}
