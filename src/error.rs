//! Error type shared by the section updater and its file boundary.
//!
//! Malformed positioning input and duplicated sections are not errors: they are
//! normalised by the updater. Only requests that cannot be honoured at all, and
//! I/O that fails for reasons other than a missing file, surface here.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
/// Failures surfaced to callers of the library and the CLI.
pub enum Error {
    /// The request is missing its section identifier or content.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Reading or writing a target file failed.
    #[error("error accessing {}: {source}", path.display())]
    Io {
        /// File that could not be read or written.
        path: PathBuf,
        /// Underlying operating system error.
        source: io::Error,
    },

    /// A target file exists but is not valid UTF-8 text.
    #[error("{} is not valid UTF-8 text", path.display())]
    NotUtf8 {
        /// File that could not be decoded.
        path: PathBuf,
    },

    /// An edit plan could not be parsed or contains an unusable edit.
    #[error("invalid edit plan: {0}")]
    Plan(String),

    /// The configuration file exists but could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The markdown parser could not be initialised.
    #[error("markdown parser error: {0}")]
    Format(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
