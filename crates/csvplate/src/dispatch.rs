//! Choosing between single-file and per-row rendering.

use csvplate_render::TemplateEngine;

use crate::sink::Destination;

/// How a run writes its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Render the template once with every record, into one destination.
    SingleFile(Destination),
    /// Render `name_template` per record to get each destination.
    PerRow { name_template: String },
}

/// Decides the render mode from the raw `--out` value.
///
/// The test is purely textual: any expression marker of `engine` selects
/// per-row mode, even when the name template turns out to be constant or
/// fails to compile later.
pub fn decide(out: &str, engine: &dyn TemplateEngine) -> RenderMode {
    let mode = if engine.contains_expression(out) {
        RenderMode::PerRow {
            name_template: out.to_string(),
        }
    } else {
        RenderMode::SingleFile(Destination::parse(out))
    };
    tracing::debug!(out, ?mode, "chose render mode");
    mode
}
