use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting an image/descriptor pair.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The image or its companion descriptor does not exist
    #[error("Missing input: {}", path.display())]
    MissingInput { path: PathBuf },

    /// A timecode or descriptor line is malformed
    #[error("Invalid format: {0}")]
    Format(String),

    /// A computed track start or length falls outside the image
    #[error("Out of range: {0}")]
    Range(String),

    /// I/O error while reading inputs or writing artifacts
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput { path: path.into() }
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }
}

impl ConvertError {
    /// Prefix a format or range message with where it happened (a line, a track).
    pub(crate) fn context(self, location: impl std::fmt::Display) -> Self {
        match self {
            Self::Format(msg) => Self::Format(format!("{location}: {msg}")),
            Self::Range(msg) => Self::Range(format!("{location}: {msg}")),
            other => other,
        }
    }
}
