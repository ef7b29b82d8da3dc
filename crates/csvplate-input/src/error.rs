//! Error types for input resolution and loading.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading sources or loading CSV data.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The source exists (or might) but could not be opened or read.
    #[error("open {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read from stdin.
    #[error("read stdin: {0}")]
    StdinFailed(#[source] io::Error),

    /// The CSV source decoded to zero rows.
    #[error("csv is empty")]
    EmptySource,

    /// The CSV text is syntactically broken.
    #[error("line {line}: {message}")]
    MalformedInput { line: u64, message: String },

    /// A non-ASCII separator could not be mapped to a byte the CSV reader
    /// splits on, because the text already uses every candidate.
    #[error("separator {0:?} cannot be used with this text")]
    SeparatorUnavailable(char),

    /// The CSV reader rejected the input.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl InputError {
    /// Create a malformed input error.
    pub fn malformed(line: u64, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            message: message.into(),
        }
    }

    /// Create a source unavailable error.
    pub fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display_includes_line() {
        let err = InputError::malformed(3, "bare \" in non-quoted field");
        assert_eq!(err.to_string(), "line 3: bare \" in non-quoted field");
    }

    #[test]
    fn unavailable_display_includes_path() {
        let err = InputError::unavailable(
            "secret.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("secret.csv"));
        assert!(msg.contains("permission denied"));
    }
}
