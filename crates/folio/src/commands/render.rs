//! `folio render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use folio_fetch::Fetcher;
use folio_site::{AssemblyState, PageLoad, Site};

use super::{build_site, load_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Location path to render, e.g. `/about`.
    path: String,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Static site root (overrides config).
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Base URL to fetch documents from (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, stdout cannot be written or
    /// the content pipeline ends in `Failed`.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let config = load_config(self.config.as_deref(), self.root, self.base_url)?;
        let site = build_site(&config);

        let page = render_page(&site, &self.path).await;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(page.to_html().as_bytes())?;
        stdout.flush()?;

        finish(&page, &self.path)
    }
}

/// Run one page load.
async fn render_page<F: Fetcher>(site: &Site<F>, path: &str) -> PageLoad {
    let page = site.load(path).await;
    if !page.chrome_applied {
        Output::new().warning("Navigation document unavailable, using shell defaults");
    }
    page
}

/// Map the terminal content state to the command result.
fn finish(page: &PageLoad, path: &str) -> Result<(), CliError> {
    match page.state {
        AssemblyState::Failed => Err(CliError::PageFailed(path.to_owned())),
        AssemblyState::NotFound => {
            Output::new().warning(&format!("No content document for {path}"));
            Ok(())
        }
        _ => Ok(()),
    }
}
