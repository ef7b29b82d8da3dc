//! Output destinations and the streams written to them.
//!
//! [`open`] turns a [`Destination`] into a ready-to-use [`Output`]:
//! missing parent directories are created first, and an existing file is
//! refused unless overwriting was allowed.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use csvplate_input::STDIO_SENTINEL;

/// Where rendered output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Write to standard output.
    Stdout,
    /// Write to a specific file.
    File(PathBuf),
}

impl Destination {
    /// Parses an output designator: empty or `-` is stdout, anything else
    /// a file path.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == STDIO_SENTINEL {
            Destination::Stdout
        } else {
            Destination::File(PathBuf::from(raw))
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Destination::Stdout)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => write!(f, "stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Errors raised while securing a destination.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("output file {} already exists (use --force to overwrite)", .0.display())]
    DestinationExists(PathBuf),

    #[error("inspect output file {}: {source}", path.display())]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("create directories {}: {source}", path.display())]
    CreateDirectories {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("create output file {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// An open output stream.
///
/// Stdout is borrowed from the caller so tests can capture it; files are
/// buffered and flushed by [`Output::close`].
pub enum Output<'a> {
    Stdout(&'a mut dyn Write),
    File(BufWriter<File>),
}

impl Output<'_> {
    /// Flushes everything written so far and releases the stream.
    pub fn close(self) -> io::Result<()> {
        match self {
            Output::Stdout(out) => out.flush(),
            Output::File(mut file) => file.flush(),
        }
    }
}

impl Write for Output<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(out) => out.write(buf),
            Output::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(out) => out.flush(),
            Output::File(file) => file.flush(),
        }
    }
}

/// Opens `destination` for writing.
///
/// For [`Destination::Stdout`] the given `stdout` is returned and no checks
/// are made. For a file, parent directories are created, then unless
/// `overwrite` is set an existing entry at the path is refused, and
/// finally the file is created (or truncated).
pub fn open<'a>(
    destination: &Destination,
    overwrite: bool,
    stdout: &'a mut dyn Write,
) -> Result<Output<'a>, SinkError> {
    let path = match destination {
        Destination::Stdout => return Ok(Output::Stdout(stdout)),
        Destination::File(path) => path,
    };

    create_parent_dirs(path)?;

    if !overwrite {
        match fs::metadata(path) {
            Ok(_) => return Err(SinkError::DestinationExists(path.clone())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(SinkError::DestinationUnavailable {
                    path: path.clone(),
                    source: err,
                })
            }
        }
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        // The probe above can race with another writer; create_new closes
        // that window.
        options.create_new(true);
    }

    let file = options.open(path).map_err(|err| {
        if err.kind() == io::ErrorKind::AlreadyExists {
            SinkError::DestinationExists(path.clone())
        } else {
            SinkError::CreateFile {
                path: path.clone(),
                source: err,
            }
        }
    })?;

    tracing::debug!(path = %path.display(), overwrite, "opened output file");
    Ok(Output::File(BufWriter::new(file)))
}

fn create_parent_dirs(path: &Path) -> Result<(), SinkError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|err| SinkError::CreateDirectories {
                path: parent.to_path_buf(),
                source: err,
            })
        }
        _ => Ok(()),
    }
}
