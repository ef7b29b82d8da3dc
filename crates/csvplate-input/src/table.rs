//! Loading CSV text into ordered records.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Serialize;

use crate::quoting::validate_quotes;
use crate::InputError;

/// Default name of the synthetic row counter field.
pub const DEFAULT_COUNTER: &str = "_index_";

/// How CSV text is turned into records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Field separator.
    pub separator: char,
    /// Whether the first row holds the field names.
    pub has_header: bool,
    /// Name of the field that receives the 1-based row number.
    pub counter: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            separator: ',',
            has_header: true,
            counter: DEFAULT_COUNTER.to_string(),
        }
    }
}

/// One CSV row as an ordered field name → value mapping.
///
/// Keys are the header names in column order, followed by the counter
/// field. Values are always strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Returns the value of a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Iterates over field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }
}

/// The result of one load: the header and the ordered records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    headers: Vec<String>,
    #[serde(rename = "rows")]
    records: Vec<Record>,
}

impl Table {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parses CSV text into a [`Table`].
///
/// The whole text is read in one batch. Column count mismatches are never
/// an error: short rows are padded with empty strings and extra trailing
/// values are dropped. Rows without any column are skipped and do not
/// consume a counter value.
///
/// If the counter name equals a header name, the counter overwrites that
/// column in every record.
///
/// # Errors
///
/// - [`InputError::MalformedInput`] for broken quoting
/// - [`InputError::Csv`] if the reader rejects the text
/// - [`InputError::EmptySource`] if there is not a single row
pub fn load_table(text: &str, options: &TableOptions) -> Result<Table, InputError> {
    validate_quotes(text, options.separator)?;
    let (text, delimiter) = byte_delimited(text, options.separator)?;
    let restore = |value: &str| -> String {
        if options.separator.is_ascii() {
            value.to_string()
        } else {
            value.replace(char::from(delimiter), options.separator.encode_utf8(&mut [0; 4]))
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let rows = reader
        .records()
        .collect::<Result<Vec<csv::StringRecord>, csv::Error>>()?;

    let Some(first) = rows.first() else {
        return Err(InputError::EmptySource);
    };

    let (headers, data) = if options.has_header {
        let headers = first.iter().map(restore).collect::<Vec<_>>();
        (headers, &rows[1..])
    } else {
        let headers = (1..=first.len()).map(|i| format!("C{}", i)).collect();
        (headers, &rows[..])
    };

    let mut records = Vec::with_capacity(data.len());
    let mut skipped = 0usize;
    for row in data {
        if row.is_empty() {
            skipped += 1;
            continue;
        }
        let mut record = Record::default();
        for (i, name) in headers.iter().enumerate() {
            record.set(name, restore(row.get(i).unwrap_or("")));
        }
        record.set(&options.counter, (records.len() + 1).to_string());
        records.push(record);
    }

    tracing::debug!(
        columns = headers.len(),
        records = records.len(),
        skipped,
        has_header = options.has_header,
        "loaded csv"
    );

    Ok(Table { headers, records })
}

/// Returns text the byte-oriented CSV reader can split, plus the byte to
/// split on.
///
/// A non-ASCII separator is swapped for an ASCII byte that does not occur
/// anywhere in `text`, so every occurrence of that byte in the parsed
/// fields stands for the separator.
fn byte_delimited(text: &str, separator: char) -> Result<(Cow<'_, str>, u8), InputError> {
    if separator.is_ascii() {
        return Ok((Cow::Borrowed(text), separator as u8));
    }
    let stand_in = (0x01u8..0x80)
        .filter(|b| !matches!(b, b'"' | b'\r' | b'\n'))
        .find(|b| !text.as_bytes().contains(b))
        .ok_or(InputError::SeparatorUnavailable(separator))?;
    tracing::trace!(%separator, stand_in, "substituting separator");
    let replaced = text.replace(separator, char::from(stand_in).encode_utf8(&mut [0; 4]));
    Ok((Cow::Owned(replaced), stand_in))
}
