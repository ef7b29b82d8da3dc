//! Strict quote validation for CSV text.
//!
//! The `csv` reader accepts stray and unterminated quotes by reading them
//! as data. This pass rejects them up front so broken input fails loudly
//! instead of producing shifted columns.

use crate::InputError;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    /// At the first character of a field.
    FieldStart,
    /// Inside a field that did not start with a quote.
    Unquoted,
    /// Inside a quoted field.
    Quoted,
    /// Just saw a quote inside a quoted field.
    QuoteInQuoted,
}

/// Checks that every quote in `text` is well placed.
///
/// A quote may only open a field, close it, or appear doubled inside a
/// quoted field.
pub(crate) fn validate_quotes(text: &str, separator: char) -> Result<(), InputError> {
    let mut state = State::FieldStart;
    let mut line: u64 = 1;
    let mut quote_line: u64 = 1;

    for c in text.chars() {
        state = match (state, c) {
            (State::FieldStart, '"') => {
                quote_line = line;
                State::Quoted
            }
            (State::Unquoted, '"') => {
                return Err(InputError::malformed(line, "bare \" in non-quoted field"));
            }
            (State::FieldStart | State::Unquoted, c) if c == separator => State::FieldStart,
            (State::FieldStart | State::Unquoted, '\n') => State::FieldStart,
            (State::FieldStart | State::Unquoted, _) => State::Unquoted,
            (State::Quoted, '"') => State::QuoteInQuoted,
            (State::Quoted, _) => State::Quoted,
            (State::QuoteInQuoted, '"') => State::Quoted,
            (State::QuoteInQuoted, c) if c == separator => State::FieldStart,
            (State::QuoteInQuoted, '\n') => State::FieldStart,
            (State::QuoteInQuoted, '\r') => State::Unquoted,
            (State::QuoteInQuoted, _) => {
                return Err(InputError::malformed(
                    line,
                    "extraneous \" in quoted field",
                ));
            }
        };
        if c == '\n' {
            line += 1;
        }
    }

    if state == State::Quoted {
        return Err(InputError::malformed(
            quote_line,
            "unterminated quoted field",
        ));
    }
    Ok(())
}
