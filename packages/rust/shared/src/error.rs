//! Error types for the corpus builder.
//!
//! Library crates use [`CorpusError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all corpus builder operations.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// A source document could not be retrieved.
    #[error("transfer error: {url}{}: {message}", status_suffix(.status))]
    Transfer {
        url: String,
        status: Option<u16>,
        message: String,
    },

    /// A fetched document produced no usable content.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Persisted document could not be read back or encoded.
    #[error("storage error: {0}")]
    Storage(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (oversized response, bad URL, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CorpusError>;

impl CorpusError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a transfer error for `url`, with the HTTP status if one was received.
    pub fn transfer(url: impl Into<String>, status: Option<u16>, msg: impl Into<String>) -> Self {
        Self::Transfer {
            url: url.into(),
            status,
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// HTTP status carried by a transfer error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transfer { status, .. } => *status,
            _ => None,
        }
    }
}
