//! Entry point for the `graphwalk` binary.
//!
//! Installs logging, parses arguments, runs the command against stdin and a
//! buffered stdout, and maps failures to a non-zero exit code. Core errors
//! are logged with their stable codes.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use graphwalk_cli::{
    cli::{Cli, CliError, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    run_cli(cli, stdin.lock(), &mut writer).context("failed to execute command")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, detail_code) = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Core(core) => Some((Some(core.code()), Some(core.detail_code()))),
                _ => None,
            })
            .unwrap_or((None, None));

        error!(
            error = %format!("{err:#}"),
            code = code.map(|code| field::display(code.as_str())),
            detail_code = detail_code.map(field::display),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "logging is unavailable until the subscriber is installed"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
