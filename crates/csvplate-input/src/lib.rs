//! Input resolution and tabular loading for csvplate.
//!
//! `csvplate-input` turns the `--csv` and `--template` command line values
//! into text, and turns CSV text into an ordered collection of records.
//!
//! # Designators
//!
//! A single string names where content comes from. It is classified once
//! into a [`Designator`]:
//!
//! ```text
//! ""  or "-"          → Designator::Stdin
//! "data/people.csv"   → Designator::Path    (the file exists)
//! "Hello {{ Name }}"  → Designator::Literal (no such file)
//! ```
//!
//! # Loading
//!
//! ```
//! use csvplate_input::{load_table, TableOptions};
//!
//! let table = load_table("Name,Age\nAda,36\n", &TableOptions::default()).unwrap();
//! assert_eq!(table.headers(), ["Name", "Age"]);
//! assert_eq!(table.records()[0].get("_index_"), Some("1"));
//! ```
//!
//! # Testing
//!
//! Stdin is reached through the [`StdinReader`] trait so tests can inject
//! content without piping:
//!
//! ```
//! use csvplate_input::{ContentResolver, Designator, MockStdin};
//!
//! let resolver = ContentResolver::with_reader(MockStdin::piped("a,b\n1,2\n"));
//! let text = resolver.resolve(&Designator::Stdin).unwrap();
//! assert_eq!(text, "a,b\n1,2\n");
//! ```

mod decode;
mod designator;
pub mod env;
mod error;
mod quoting;
mod source;
mod table;

pub use decode::{decode_text, Decoded};
pub use designator::{Designator, STDIO_SENTINEL};
pub use env::{MockStdin, RealStdin, StdinReader};
pub use error::InputError;
pub use source::ContentResolver;
pub use table::{load_table, Record, Table, TableOptions, DEFAULT_COUNTER};
