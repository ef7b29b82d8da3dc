//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait the csvplate pipeline
//! compiles and executes templates through. The default implementation is
//! [`MiniJinjaEngine`].

use std::io::Write;

use minijinja::{AutoEscape, Environment, Value};

use crate::error::RenderError;
use crate::functions::register_functions;

/// A template engine that compiles named templates and executes them
/// against a data context, streaming the output into a writer.
pub trait TemplateEngine {
    /// Compiles `source` and stores it under `name`.
    ///
    /// Syntax errors are reported here, before anything is executed.
    fn compile(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Executes a compiled template with `context` as its root data,
    /// writing the output to `out`.
    fn execute(
        &self,
        name: &str,
        context: &serde_json::Value,
        out: &mut dyn Write,
    ) -> Result<(), RenderError>;

    /// Executes a compiled template and returns the output as a string.
    fn execute_to_string(
        &self,
        name: &str,
        context: &serde_json::Value,
    ) -> Result<String, RenderError> {
        let mut buffer = Vec::new();
        self.execute(name, context, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| RenderError::OperationError(e.to_string()))
    }

    /// Checks if a template with the given name was compiled.
    fn has_template(&self, name: &str) -> bool;

    /// The tokens that open an expression or statement in this engine's
    /// syntax. Text containing none of them renders to itself.
    fn expression_markers(&self) -> &'static [&'static str];

    /// Returns true if `text` contains any expression marker.
    fn contains_expression(&self, text: &str) -> bool {
        self.expression_markers()
            .iter()
            .any(|marker| text.contains(marker))
    }
}

/// MiniJinja-based template engine.
///
/// Configured for plain text generation:
/// - trailing newlines in templates are kept
/// - no auto escaping, whatever the template name
/// - undefined values render as empty strings
/// - the csvplate helper filters are registered
///
/// # Example
///
/// ```rust
/// use csvplate_render::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let mut engine = MiniJinjaEngine::new();
/// engine.compile("greeting", "Hello, {{ name }}!\n").unwrap();
///
/// let output = engine
///     .execute_to_string("greeting", &json!({ "name": "World" }))
///     .unwrap();
/// assert_eq!(output, "Hello, World!\n");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

/// Opening tokens of MiniJinja expressions and statements.
pub const MINIJINJA_MARKERS: &[&str] = &["{{", "{%"];

impl MiniJinjaEngine {
    /// Creates a new MiniJinja engine with the helper filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        register_functions(&mut env);
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn compile(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        tracing::trace!(template = name, bytes = source.len(), "compiled template");
        Ok(())
    }

    fn execute(
        &self,
        name: &str,
        context: &serde_json::Value,
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        let tmpl = self.env.get_template(name)?;
        let value = Value::from_serialize(context);
        tmpl.render_to_write(value, out)?;
        Ok(())
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    fn expression_markers(&self) -> &'static [&'static str] {
        MINIJINJA_MARKERS
    }
}
