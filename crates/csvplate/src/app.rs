//! The application runner.
//!
//! [`run`] executes one validated [`Config`] against an [`Io`] bundle and
//! returns a typed result. [`run_cli`] adds argument parsing and error
//! reporting on top and returns the process exit code, so the binary
//! itself only wires up the real streams.

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use console::Style;
use csvplate_input::{load_table, ContentResolver, StdinReader};
use csvplate_render::{MiniJinjaEngine, TemplateEngine};

use crate::config::{Cli, Config};
use crate::dispatch::{decide, RenderMode};
use crate::error::AppError;
use crate::render::{render_per_row, render_single, CONTENT_TEMPLATE, OUTPUT_TEMPLATE};

/// The process streams a run talks to.
pub struct Io<'a> {
    pub stdin: &'a dyn StdinReader,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
    /// Whether error output may be styled.
    pub color: bool,
}

/// Runs csvplate with a validated configuration.
pub fn run(config: &Config, io: &mut Io<'_>) -> Result<(), AppError> {
    let mut engine = MiniJinjaEngine::new();
    run_with_engine(config, &mut engine, io)
}

/// Runs csvplate with the given template engine.
///
/// Sources are read and templates compiled before anything is written.
pub fn run_with_engine(
    config: &Config,
    engine: &mut dyn TemplateEngine,
    io: &mut Io<'_>,
) -> Result<(), AppError> {
    let resolver = ContentResolver::with_reader(io.stdin);

    let csv = resolver.resolve(&config.csv).map_err(AppError::ReadCsv)?;
    let table = load_table(&csv, &config.table).map_err(AppError::ReadCsv)?;

    let template = resolver
        .resolve(&config.template)
        .map_err(AppError::ReadTemplate)?;
    engine
        .compile(CONTENT_TEMPLATE, &template)
        .map_err(AppError::ParseTemplate)?;

    let mode = decide(&config.out, &*engine);
    if let RenderMode::PerRow { name_template } = &mode {
        engine
            .compile(OUTPUT_TEMPLATE, name_template)
            .map_err(AppError::ParseOutputTemplate)?;
    }

    match mode {
        RenderMode::SingleFile(destination) => {
            render_single(&*engine, &table, &destination, config.force, io.stdout)
        }
        RenderMode::PerRow { .. } => render_per_row(
            &*engine,
            table.records(),
            config.force,
            io.stdout,
            io.stderr,
        )
        .map(|_| ()),
    }
}

/// Parses `args`, runs, and reports any error on `io.stderr`.
///
/// Returns the process exit code: 0 on success (including `--help`,
/// `--version` and a bare invocation, which prints the help), 1 otherwise.
pub fn run_cli<I, T>(args: I, io: &mut Io<'_>) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if args.len() <= 1 {
        let help = Cli::command().render_help();
        return match write!(io.stdout, "{help}") {
            Ok(()) => 0,
            Err(_) => 1,
        };
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                return match write!(io.stdout, "{err}") {
                    Ok(()) => 0,
                    Err(_) => 1,
                };
            }
            _ => {
                let rendered = err.to_string();
                let message = rendered
                    .trim_start_matches("error: ")
                    .trim_end();
                report(io, message);
                return 1;
            }
        },
    };

    let result = Config::from_cli(cli).and_then(|config| run(&config, io));
    match result {
        Ok(()) => 0,
        Err(err) => {
            report(io, &err.to_string());
            if err.is_config() {
                let _ = writeln!(io.stderr, "Run 'csvplate --help' for usage.");
            }
            err.exit_code()
        }
    }
}

fn report(io: &mut Io<'_>, message: &str) {
    let prefix = Style::new().red().bold().force_styling(io.color);
    let _ = writeln!(io.stderr, "{}: {message}", prefix.apply_to("csvplate"));
}
