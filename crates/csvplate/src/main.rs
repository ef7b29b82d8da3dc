use std::io::IsTerminal;
use std::process::ExitCode;

use csvplate::{run_cli, Io};
use csvplate_input::RealStdin;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_env("CSVPLATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let stdin = RealStdin;
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let color = stderr.is_terminal();
    let (mut stdout, mut stderr) = (stdout.lock(), stderr.lock());

    let mut io = Io {
        stdin: &stdin,
        stdout: &mut stdout,
        stderr: &mut stderr,
        color,
    };
    ExitCode::from(run_cli(std::env::args_os(), &mut io))
}
