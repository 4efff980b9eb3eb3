//! HR Desk Control - command-line front end for the HR assistant
//!
//! With no subcommand, runs the sample queries and prints the transcript.

use clap::Parser;
use hrdeskctl::cli::Cli;
use hrdeskctl::commands::Desk;
use hrdeskctl::errors::{exit_code_for, EXIT_SUCCESS};
use hrdeskctl::logging;
use std::io::Write;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing();
    debug!(version = env!("HRDESK_VERSION"), "hrdeskctl starting");

    let code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for(&e)
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let desk = Desk::from_cli(cli)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    desk.run(cli.command.as_ref(), &mut out)?;
    out.flush()?;
    Ok(())
}
