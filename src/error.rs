//! Error types for pagecite library.

use std::io;
use thiserror::Error;

/// Result type alias for pagecite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting or querying documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The external text extractor ran and reported a failure.
    ///
    /// The message is the extractor's own diagnostic output.
    #[error("{0}")]
    Extraction(String),

    /// The external text extractor could not be started.
    #[error("text extractor '{program}' is unavailable: {source}")]
    ExtractorUnavailable {
        /// Program that was invoked
        program: String,
        /// Underlying spawn error
        #[source]
        source: io::Error,
    },

    /// A query intended as a pattern could not be compiled.
    #[error("Invalid regex: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A caller-supplied parameter is out of range or unrecognized.
    #[error("invalid value for '{name}': {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Error during rendering (JSON export).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build an [`Error::InvalidArgument`] for the named parameter.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
