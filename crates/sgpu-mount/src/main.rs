//! sgpu-mount CLI entry point.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use color_eyre::eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use sgpu_mount::cli::Cli;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Missing positional arguments print usage and exit 0, same as -h;
    // only genuinely malformed invocations get clap's usage-error exit.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            Cli::command().print_help()?;
            return Ok(());
        }
        Err(err) => err.exit(),
    };

    // Initialize tracing
    let default_level = if cli.debug {
        "sgpu_mount=debug"
    } else {
        "sgpu_mount=info"
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive(default_level.parse()?))
        .init();

    // The exit code carries the failing step's errno so callers can tell
    // failure modes apart.
    if let Err(err) = cli.execute() {
        let code = err.os_error_code().unwrap_or(1);
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }

    Ok(())
}
