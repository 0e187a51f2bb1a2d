//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::middleware::map_response;
use folio_fetch::Fetcher;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub fn create_router<F: Fetcher + 'static>(state: Arc<AppState<F>>) -> Router {
    Router::new()
        .fallback(handlers::pages::get_page::<F>)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(map_response(security::security_headers)),
        )
        .with_state(state)
}
