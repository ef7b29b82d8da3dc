//! The two rendering strategies.
//!
//! Both expect the content template to be compiled under
//! [`CONTENT_TEMPLATE`]; per-row rendering additionally expects the output
//! name template under [`OUTPUT_TEMPLATE`].

use std::io::Write;

use csvplate_input::{Record, Table};
use csvplate_render::{RenderError, TemplateEngine};
use serde_json::Value;

use crate::error::AppError;
use crate::sink::{self, Destination};

/// Name the content template is compiled under.
pub const CONTENT_TEMPLATE: &str = "content";

/// Name the output file name template is compiled under.
pub const OUTPUT_TEMPLATE: &str = "outfile";

/// Context for single-file rendering: `rows` holds every record in source
/// order, `headers` the column names.
pub fn single_context(table: &Table) -> Result<Value, RenderError> {
    Ok(serde_json::to_value(table)?)
}

/// Context for one record: every field at the top level, plus the whole
/// record as `row` unless a field already has that name.
pub fn row_context(record: &Record) -> Result<Value, RenderError> {
    let mut context = serde_json::to_value(record)?;
    if let Value::Object(fields) = &mut context {
        if !fields.contains_key("row") {
            let row = Value::Object(fields.clone());
            fields.insert("row".to_string(), row);
        }
    }
    Ok(context)
}

/// Renders the content template once, with all records, into
/// `destination`.
///
/// A failed execution leaves whatever was already written in place. On
/// success the file name is confirmed on `stdout`.
pub fn render_single(
    engine: &dyn TemplateEngine,
    table: &Table,
    destination: &Destination,
    force: bool,
    stdout: &mut dyn Write,
) -> Result<(), AppError> {
    let context = single_context(table).map_err(AppError::ExecuteTemplate)?;

    let mut output = sink::open(destination, force, stdout)?;
    engine
        .execute(CONTENT_TEMPLATE, &context, &mut output)
        .map_err(AppError::ExecuteTemplate)?;
    output.close()?;

    if let Destination::File(path) = destination {
        writeln!(stdout, "result saved in {}", path.display())?;
    }
    Ok(())
}

/// Renders one output per record.
///
/// For each record the output name template picks the destination, then
/// the content template fills it. A destination that cannot be opened
/// (typically an existing file without `force`) is reported on `stderr`
/// and skipped; template failures abort the batch. Each written
/// destination is printed on `stdout` as it completes.
///
/// Returns the number of files written, or
/// [`AppError::FilesNotWritten`] if any destination was skipped.
pub fn render_per_row(
    engine: &dyn TemplateEngine,
    records: &[Record],
    force: bool,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<usize, AppError> {
    let mut written = 0;
    let mut skipped = 0;

    for (row, record) in records.iter().enumerate() {
        let context =
            row_context(record).map_err(|source| AppError::RenderOutputName { row, source })?;

        let name = engine
            .execute_to_string(OUTPUT_TEMPLATE, &context)
            .map_err(|source| AppError::RenderOutputName { row, source })?;
        if name.is_empty() {
            return Err(AppError::EmptyOutputName { row });
        }

        let destination = Destination::parse(&name);
        let mut output = match sink::open(&destination, force, stdout) {
            Ok(output) => output,
            Err(err) => {
                tracing::debug!(row, destination = %name, error = %err, "skipping row");
                writeln!(stderr, "  {name}: {err}")?;
                skipped += 1;
                continue;
            }
        };

        engine
            .execute(CONTENT_TEMPLATE, &context, &mut output)
            .map_err(|source| AppError::RenderContent {
                destination: name.clone(),
                source,
            })?;
        output.close()?;

        writeln!(stdout, "{name}")?;
        written += 1;
    }

    tracing::debug!(written, skipped, "per-row rendering finished");
    if skipped > 0 {
        return Err(AppError::FilesNotWritten(skipped));
    }
    Ok(written)
}
