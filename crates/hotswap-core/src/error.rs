//! Error types for hotswap-core.

use thiserror::Error;

/// Result type for hotswap-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hotswap-core.
///
/// Only setup-time conditions are errors. A hot-swap subprocess that exits
/// non-zero is reported through logging and never surfaces here; the event
/// stream must keep flowing.
#[derive(Debug, Error)]
pub enum Error {
    /// Interpreter discovery exhausted every strategy.
    #[error("hot swap couldn't find java")]
    JavaNotFound,

    /// File watch error.
    #[error("file watch error: {0}")]
    Watch(String),

    /// IO error during setup (e.g. resolving the agent artifact path).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
