//! # csvplate
//!
//! Generate text files from a CSV file and a template.
//!
//! A run loads the CSV into ordered records, compiles the template, and
//! then writes output in one of two modes, chosen by looking at `--out`:
//!
//! - **single file**: `--out` is a plain path (or empty for stdout). The
//!   template renders once with every record available as `rows`.
//! - **per row**: `--out` itself contains a template expression. For every
//!   record it renders to a file name, and the template renders into that
//!   file with the record's fields as variables.
//!
//! In per-row mode a destination that already exists is skipped and
//! counted rather than aborting the batch; the run still fails at the end
//! with the number of files not written.
//!
//! ```
//! use csvplate::{run_cli, Io};
//! use csvplate_input::MockStdin;
//!
//! let stdin = MockStdin::piped("Name\nAda\nGrace\n");
//! let (mut stdout, mut stderr) = (Vec::new(), Vec::new());
//! let mut io = Io {
//!     stdin: &stdin,
//!     stdout: &mut stdout,
//!     stderr: &mut stderr,
//!     color: false,
//! };
//!
//! let code = run_cli(
//!     ["csvplate", "-t", "{% for r in rows %}{{ r.Name }};{% endfor %}"],
//!     &mut io,
//! );
//! assert_eq!(code, 0);
//! assert_eq!(stdout, b"Ada;Grace;");
//! ```
//!
//! ## Modules
//!
//! - [`config`]: command line flags and validation
//! - [`dispatch`]: choosing the render mode
//! - [`render`]: single-file and per-row rendering
//! - [`sink`]: output destinations

pub mod app;
pub mod config;
pub mod dispatch;
mod error;
pub mod render;
pub mod sink;

pub use app::{run, run_cli, run_with_engine, Io};
pub use config::{Cli, Config};
pub use dispatch::{decide, RenderMode};
pub use error::{AppError, ConfigError};
pub use sink::{Destination, Output, SinkError};
