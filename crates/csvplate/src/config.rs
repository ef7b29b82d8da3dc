//! Command line flags and their validation.
//!
//! [`Cli`] is what clap parses; [`Config`] is what the runner consumes.
//! [`Config::from_cli`] is the only way from one to the other, so every
//! check happens before anything is read or written.

use clap::Parser;

use csvplate_input::{Designator, TableOptions, DEFAULT_COUNTER};

use crate::error::{AppError, ConfigError};

const MODE_HELP: &str = "\
Mode of operation:
  If --out contains a template expression ({{ ... }} or {% ... %}), one
  file is written per CSV row: --out is rendered with the row to get the
  file name, then the template is rendered with the row as content.
  Each column is available by name ({{ Name }}) and the whole row as
  {{ row }} (use row[\"Some Column\"] for names with spaces).

  Otherwise a single output is written: the template is rendered once
  with {{ rows }} (all records) and {{ headers }} (the column names).

  --csv and --template accept a file path, '-' for stdin, or the content
  itself when no such file exists. Only one of them can read stdin.
  An empty --out or '-' writes to stdout.

Examples:
  csvplate -i people.csv -t letter.tmpl -o 'letters/{{ Name | slugify }}.txt'
  csvplate -i people.csv -t '{% for r in rows %}{{ r.Name }}\\n{% endfor %}'
  cat people.csv | csvplate -t report.tmpl -o report.txt";

/// Raw command line flags.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "csvplate")]
#[command(version)]
#[command(about = "Generate one or many text files from a CSV file and a template")]
#[command(after_help = MODE_HELP)]
pub struct Cli {
    /// CSV source: file path, '-' for stdin, or inline CSV text
    #[arg(short = 'i', long = "csv", value_name = "CSV", allow_hyphen_values = true)]
    pub csv: Option<String>,

    /// Template source: file path, '-' for stdin, or inline template text
    #[arg(short = 't', long, value_name = "TEMPLATE", allow_hyphen_values = true)]
    pub template: Option<String>,

    /// Output file, or a template rendering one file name per row
    #[arg(short = 'o', long, value_name = "OUT", allow_hyphen_values = true)]
    pub out: Option<String>,

    /// Name of the field holding the 1-based row number
    #[arg(short = 'c', long, value_name = "NAME", default_value = DEFAULT_COUNTER)]
    pub counter: String,

    /// Treat the first row as data; fields are named C1, C2, ...
    #[arg(short = 'n', long)]
    pub noheader: bool,

    /// Overwrite existing output files
    #[arg(short = 'f', long)]
    pub force: bool,

    /// CSV field separator
    #[arg(long = "csv-sep", value_name = "CHAR", default_value = ",")]
    pub csv_sep: String,
}

/// Validated configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub csv: Designator,
    pub template: Designator,
    /// The raw `--out` value; the dispatch step decides what it means.
    pub out: String,
    pub table: TableOptions,
    pub force: bool,
}

impl Config {
    /// Validates parsed flags and classifies the source designators.
    pub fn from_cli(cli: Cli) -> Result<Self, AppError> {
        let csv = cli.csv.unwrap_or_default();
        let template = cli.template.unwrap_or_default();

        if csv.is_empty() && template.is_empty() {
            return Err(ConfigError::MissingInput.into());
        }
        if cli.counter.is_empty() {
            return Err(ConfigError::EmptyCounter.into());
        }
        let separator = parse_separator(&cli.csv_sep)?;

        let csv = Designator::classify(&csv).map_err(AppError::ReadCsv)?;
        let template = Designator::classify(&template).map_err(AppError::ReadTemplate)?;
        if csv.is_stdin() && template.is_stdin() {
            return Err(ConfigError::StdinConflict.into());
        }

        tracing::debug!(csv = %csv, template = %template, "classified sources");

        Ok(Self {
            csv,
            template,
            out: cli.out.unwrap_or_default(),
            table: TableOptions {
                separator,
                has_header: !cli.noheader,
                counter: cli.counter,
            },
            force: cli.force,
        })
    }
}

/// Checks that the `--csv-sep` value is one usable character.
fn parse_separator(raw: &str) -> Result<char, ConfigError> {
    let mut chars = raw.chars();
    let ch = match (chars.next(), chars.next()) {
        (Some(ch), None) => ch,
        _ => return Err(ConfigError::InvalidSeparator(raw.to_string())),
    };
    match ch {
        '"' | '\r' | '\n' => Err(ConfigError::UnsupportedSeparator(ch)),
        ch => Ok(ch),
    }
}
