//! CLI error types.

use folio_config::ConfigError;
use folio_server::ServerError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Server(#[from] ServerError),

    #[error("Content for {0} could not be loaded")]
    PageFailed(String),

    #[error("{0} document(s) failed to load")]
    Check(usize),
}
