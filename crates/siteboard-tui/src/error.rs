//! Terminal dashboard errors.

use siteboard_common::error::SiteboardError;
use thiserror::Error;

/// Errors that end the terminal dashboard.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Terminal setup, drawing, or input failed.
    #[error("terminal error: {source}")]
    Terminal {
        /// Underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The dashboard could not be wired up from its configuration.
    #[error(transparent)]
    Setup(#[from] SiteboardError),
}
