//! Error types for template compilation and execution.
//!
//! [`RenderError`] is the only error type this crate returns. It hides the
//! underlying template engine's error type behind a stable set of variants.

use std::fmt;

/// Error type for template operations.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error found while compiling.
    SyntaxError(String),

    /// The template referenced an unknown filter, test, function or method.
    UnknownName(String),

    /// A template with this name was never compiled.
    TemplateNotFound(String),

    /// The context could not be serialized for the engine.
    SerializationError(String),

    /// Writing rendered output failed.
    IoError(std::io::Error),

    /// Any other failure while executing a template.
    OperationError(String),
}

impl RenderError {
    /// Returns true if this error was raised while parsing template source.
    pub fn is_syntax(&self) -> bool {
        matches!(self, RenderError::SyntaxError(_))
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SyntaxError(msg) => write!(f, "{}", msg),
            RenderError::UnknownName(msg) => write!(f, "{}", msg),
            RenderError::TemplateNotFound(name) => write!(f, "template not found: {}", name),
            RenderError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            RenderError::IoError(err) => write!(f, "write output: {}", err),
            RenderError::OperationError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError(err)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::SyntaxError | ErrorKind::BadEscape => {
                RenderError::SyntaxError(err.to_string())
            }
            ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownMethod => RenderError::UnknownName(err.to_string()),
            ErrorKind::BadSerialization => RenderError::SerializationError(err.to_string()),
            ErrorKind::WriteFailure => RenderError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                err.to_string(),
            )),
            _ => RenderError::OperationError(err.to_string()),
        }
    }
}
