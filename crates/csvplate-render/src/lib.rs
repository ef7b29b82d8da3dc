//! # csvplate-render
//!
//! The template side of csvplate: a [`TemplateEngine`] trait, its MiniJinja
//! implementation, and the helper filters every template can use.
//!
//! Templates are compiled once under a name and executed many times, each
//! execution streaming into an [`std::io::Write`]:
//!
//! ```rust
//! use csvplate_render::{MiniJinjaEngine, TemplateEngine};
//! use serde_json::json;
//!
//! let mut engine = MiniJinjaEngine::new();
//! engine.compile("outfile", "out/{{ Name | slugify }}.txt").unwrap();
//!
//! let path = engine
//!     .execute_to_string("outfile", &json!({ "Name": "Zoë Smith" }))
//!     .unwrap();
//! assert_eq!(path, "out/zoe-smith.txt");
//! ```
//!
//! ## See Also
//!
//! - [`functions`]: the helper filter library
//! - [`util`]: the text layout functions behind those filters

mod engine;
mod error;
pub mod functions;
pub mod util;

pub use engine::{MiniJinjaEngine, TemplateEngine, MINIJINJA_MARKERS};
pub use error::RenderError;
pub use functions::register_functions;
