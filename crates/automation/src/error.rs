//! Automation-layer error model.

use std::path::PathBuf;

use thiserror::Error;
use vendkore_cart::CartParseError;

#[derive(Debug, Error)]
pub enum AutomationError {
    #[error("failed to spawn bot process {command:?}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("failed to stop bot process: {source}")]
    Stop { source: std::io::Error },

    #[error("failed to read console log {path}: {source}")]
    LogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    CartParse(#[from] CartParseError),

    /// The rendered shop configuration could not be written. Fatal to the
    /// confirm operation only; offer state is unaffected.
    #[error("failed to write shop config {path}: {source}")]
    Persistence {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read shop config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
}
