//! HTTP server for the Folio content renderer.
//!
//! Serves the static site with server-side page loads:
//! - request paths whose last segment has a file extension are served as-is
//!   from the site root
//! - every other `GET` is a page load, answered with the full HTML document
//!   (`200` rendered, `404` no content document, `502` content failed)
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     run_server(ServerConfig::default()).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use folio_fetch::SourceFetcher;
use folio_site::{Site, SiteConfig};

pub use app::create_router;
pub use error::ServerError;
pub use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Static site root.
    pub root: PathBuf,
    /// Base URL to fetch documents from instead of `root`.
    pub base_url: Option<String>,
    /// Page-load configuration.
    pub site: SiteConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            root: PathBuf::from("public"),
            base_url: None,
            site: SiteConfig::default(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener fails.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let fetcher = SourceFetcher::select(
        config.root.clone(),
        config.base_url.as_deref(),
        config.site.fetch_timeout,
    );
    tracing::info!(source = %fetcher.describe(), "Serving documents");

    let state = Arc::new(AppState {
        site: Site::new(fetcher, config.site),
        root: config.root,
    });
    let app = create_router(state);

    let addr_str = format!("{}:{}", config.host, config.port);
    let addr = SocketAddr::from_str(&addr_str).map_err(|source| ServerError::Address {
        addr: addr_str,
        source,
    })?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C, graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Page-load configuration from Folio config.
#[must_use]
pub fn site_config_from_folio_config(config: &folio_config::Config) -> SiteConfig {
    let site = &config.site_resolved;
    let defaults = SiteConfig::default();

    SiteConfig {
        name: site.name.clone(),
        routes: site.routes.clone(),
        navigation: site.navigation.clone(),
        nav: site.nav.clone().unwrap_or(defaults.nav),
        fetch_timeout: config.fetch.timeout(),
    }
}

/// Create server configuration from Folio config.
#[must_use]
pub fn server_config_from_folio_config(config: &folio_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        root: config.site_resolved.root.clone(),
        base_url: config.site_resolved.base_url.clone(),
        site: site_config_from_folio_config(config),
    }
}
