//! CLI command implementations.

mod check;
mod render;
mod serve;

use std::path::{Path, PathBuf};

use folio_config::{CliSettings, Config};
use folio_fetch::SourceFetcher;
use folio_server::site_config_from_folio_config;
use folio_site::Site;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;

/// Load configuration with site-source overrides from the command line.
fn load_config(
    config: Option<&Path>,
    root: Option<PathBuf>,
    base_url: Option<String>,
) -> Result<Config, CliError> {
    let cli_settings = CliSettings {
        root,
        base_url,
        ..CliSettings::default()
    };
    Ok(Config::load(config, Some(&cli_settings))?)
}

/// Site over the configured fetch backend.
fn build_site(config: &Config) -> Site<SourceFetcher> {
    let fetcher = SourceFetcher::select(
        config.site_resolved.root.clone(),
        config.site_resolved.base_url.as_deref(),
        config.fetch.timeout(),
    );
    tracing::info!(source = %fetcher.describe(), "Fetching documents");
    Site::new(fetcher, site_config_from_folio_config(config))
}
