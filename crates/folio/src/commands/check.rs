//! `folio check` command implementation.
//!
//! Fetches every mapped content document and the navigation document,
//! parses them and reports sections whose type has no renderer.

use std::path::PathBuf;

use clap::Args;
use folio_content::{ContentDocument, NavigationDocument};
use folio_fetch::Fetcher;
use folio_renderer::SectionKind;
use folio_site::Site;

use super::{build_site, load_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
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

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or any document cannot be
    /// fetched or parsed.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = load_config(self.config.as_deref(), self.root, self.base_url)?;
        let site = build_site(&config);

        let report = check_site(&site).await;

        for section in &report.unknown_sections {
            output.warning(&format!(
                "{}: section {} has unregistered type {:?}",
                section.locator, section.index, section.kind
            ));
        }
        for failure in &report.failures {
            output.error(&format!("{}: {}", failure.locator, failure.message));
        }

        if report.failures.is_empty() {
            output.success(&format!("{} document(s) OK", report.checked));
            Ok(())
        } else {
            Err(CliError::Check(report.failures.len()))
        }
    }
}

/// Document that could not be fetched or parsed.
#[derive(Debug, PartialEq, Eq)]
struct Failure {
    locator: String,
    message: String,
}

/// Section rendered by the fallback renderer.
#[derive(Debug, PartialEq, Eq)]
struct UnknownSection {
    locator: String,
    index: usize,
    /// Declared type, empty when the section has none.
    kind: String,
}

/// Outcome of checking a site.
#[derive(Debug, Default)]
struct CheckReport {
    checked: usize,
    failures: Vec<Failure>,
    unknown_sections: Vec<UnknownSection>,
}

/// Check every mapped document plus the navigation document.
///
/// Documents shared by several paths are checked once.
async fn check_site<F: Fetcher>(site: &Site<F>) -> CheckReport {
    let config = site.config();
    let mut report = CheckReport::default();

    let mut locators: Vec<&str> = config.routes.iter().map(|(_, locator)| locator).collect();
    locators.sort_unstable();
    locators.dedup();

    for locator in locators {
        report.checked += 1;
        let doc = match fetch_text(site, locator).await {
            Ok(text) => ContentDocument::from_yaml(&text).map_err(|e| e.to_string()),
            Err(message) => Err(message),
        };
        match doc {
            Ok(doc) => report.unknown_sections.extend(unknown_sections(locator, &doc)),
            Err(message) => report.failures.push(Failure {
                locator: locator.to_owned(),
                message,
            }),
        }
    }

    report.checked += 1;
    let navigation = match fetch_text(site, &config.navigation).await {
        Ok(text) => NavigationDocument::from_yaml(&text)
            .map(|_| ())
            .map_err(|e| e.to_string()),
        Err(message) => Err(message),
    };
    if let Err(message) = navigation {
        report.failures.push(Failure {
            locator: config.navigation.clone(),
            message,
        });
    }

    report
}

async fn fetch_text<F: Fetcher>(site: &Site<F>, locator: &str) -> Result<String, String> {
    let timeout = site.config().fetch_timeout;
    match tokio::time::timeout(timeout, site.fetcher().fetch(locator)).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(_) => Err(format!("Timed out after {}s", timeout.as_secs())),
    }
}

fn unknown_sections(locator: &str, doc: &ContentDocument) -> Vec<UnknownSection> {
    doc.sections()
        .iter()
        .enumerate()
        .filter(|(_, section)| section.kind().and_then(SectionKind::from_name).is_none())
        .map(|(index, section)| UnknownSection {
            locator: locator.to_owned(),
            index,
            kind: section.kind().unwrap_or_default().to_owned(),
        })
        .collect()
}
