//! Error types for pffdtd-io.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while decoding or encoding simulator output files.
#[derive(Debug, Error)]
pub enum Error {
    /// The input path does not exist.
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Structural violation in the file contents.
    #[error("format error in {origin}{}: {message}", at_line(.line))]
    Format {
        /// File path or other label of the input.
        origin: String,
        /// 1-based line number, when the problem is tied to one line.
        line: Option<usize>,
        message: String,
    },

    /// Invalid caller-supplied parameter (source index, field id, ...).
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn at_line(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" at line {line}"),
        None => String::new(),
    }
}

impl Error {
    pub(crate) fn format(origin: &str, line: Option<usize>, message: impl Into<String>) -> Self {
        Error::Format {
            origin: origin.to_string(),
            line,
            message: message.into(),
        }
    }

    /// True for [`Error::Format`].
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. })
    }

    /// True for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// True for [`Error::Config`].
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
