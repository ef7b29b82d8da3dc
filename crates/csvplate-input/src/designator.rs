//! Classification of source strings.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::InputError;

/// The string that names stdin (for sources) or stdout (for outputs).
pub const STDIO_SENTINEL: &str = "-";

/// Where a piece of content comes from.
///
/// The `--csv` and `--template` values share one string for "path" and
/// "inline content". [`Designator::classify`] settles which one it is
/// up front, so the rest of the pipeline never has to guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Designator {
    /// Read everything from standard input.
    Stdin,
    /// Read the file at this path.
    Path(PathBuf),
    /// The string itself is the content.
    Literal(String),
}

impl Designator {
    /// Classify a raw command line value.
    ///
    /// - empty or `-` → [`Designator::Stdin`]
    /// - an existing filesystem entry → [`Designator::Path`]
    /// - nothing at that path → [`Designator::Literal`]
    ///
    /// Any other probe failure (permission denied on a parent directory,
    /// I/O error) is reported as [`InputError::SourceUnavailable`].
    pub fn classify(raw: &str) -> Result<Self, InputError> {
        if raw.is_empty() || raw == STDIO_SENTINEL {
            return Ok(Self::Stdin);
        }
        match std::fs::metadata(raw) {
            Ok(_) => Ok(Self::Path(PathBuf::from(raw))),
            Err(err) if is_missing(&err) => {
                tracing::debug!(value = raw, "no such file, using value as literal content");
                Ok(Self::Literal(raw.to_string()))
            }
            Err(err) => Err(InputError::unavailable(raw, err)),
        }
    }

    /// Returns true if this designator reads from stdin.
    pub fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "stdin"),
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Literal(_) => write!(f, "literal content"),
        }
    }
}

// A value containing characters the OS rejects in paths (e.g. an
// interior NUL, or a name too long for the filesystem) can never be an
// existing file, so it is literal content as well.
fn is_missing(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::InvalidInput | io::ErrorKind::InvalidFilename
    )
}
