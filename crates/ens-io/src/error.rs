//! Error types for ens-io

use thiserror::Error;

/// Result type alias for ens-io operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing molecule files
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line; `line` is 1-based
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A molecule ended before a mandatory record was seen
    #[error("molecule `{molecule}` has no @<TRIPOS>{section} record")]
    MissingSection {
        molecule: String,
        section: &'static str,
    },

    /// The records parsed but do not form a consistent molecule
    #[error(transparent)]
    Core(#[from] ens_core::Error),

    #[error("table export failed: {0}")]
    Table(#[from] polars::error::PolarsError),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}
