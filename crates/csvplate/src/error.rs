//! Application error type.

use std::io;

use csvplate_input::InputError;
use csvplate_render::RenderError;

use crate::sink::SinkError;

/// Invalid command line configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("one of --csv or --template is required")]
    MissingInput,

    #[error("--csv and --template cannot both read from stdin")]
    StdinConflict,

    #[error("--csv-sep must be a single character, got {0:?}")]
    InvalidSeparator(String),

    #[error("--csv-sep {0:?} is not supported; use a character other than a quote or line break")]
    UnsupportedSeparator(char),

    #[error("--counter must not be empty")]
    EmptyCounter,
}

/// Every way a csvplate run can fail.
///
/// The message of each variant names the step that failed, so the top
/// level can print it as-is after the program name.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("read csv: {0}")]
    ReadCsv(#[source] InputError),

    #[error("read template: {0}")]
    ReadTemplate(#[source] InputError),

    #[error("parse template: {0}")]
    ParseTemplate(#[source] RenderError),

    #[error("parse output template: {0}")]
    ParseOutputTemplate(#[source] RenderError),

    #[error("execute template: {0}")]
    ExecuteTemplate(#[source] RenderError),

    #[error(transparent)]
    Destination(#[from] SinkError),

    #[error("render output name for row {row}: {source}")]
    RenderOutputName {
        row: usize,
        #[source]
        source: RenderError,
    },

    #[error("rendered output name for row {row} is empty")]
    EmptyOutputName { row: usize },

    #[error("render template for {destination}: {source}")]
    RenderContent {
        destination: String,
        #[source]
        source: RenderError,
    },

    #[error("{0} file(s) not written")]
    FilesNotWritten(usize),

    #[error("write output: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Returns true for errors raised before anything was read or written.
    pub fn is_config(&self) -> bool {
        matches!(self, AppError::Config(_))
    }
}
