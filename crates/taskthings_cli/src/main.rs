//! `taskpaper-to-things` entry point.
//!
//! # Responsibility
//! - Read one outline tree from stdin and emit one Things project.
//! - Print pretty JSON by default; with `-e` dispatch the Things URL instead.
//!
//! # Invariants
//! - A blank project name fails before stdin is read.
//! - Output is all-or-nothing; diagnostics go to stderr only.

use clap::Parser;
use log::info;
use std::process::ExitCode;
use taskthings_cli::{read_stdin, CliError, LogArgs};
use taskthings_core::{convert_str, deliver, DeliveryMode, ProjectOptions};

/// Convert a TaskPaper outline (JSON on stdin) into a Things project.
#[derive(Debug, Parser)]
#[command(name = "taskpaper-to-things", version, args_override_self = true)]
struct Cli {
    /// Title of the Things project.
    project_name: String,
    /// Things area the project is filed under.
    area_name: Option<String>,
    /// Send the project to Things via its URL scheme instead of printing it.
    ///
    /// Accepted anywhere on the command line, any number of times.
    #[arg(short = 'e', long)]
    execute: bool,
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let options = ProjectOptions::new(cli.project_name, cli.area_name)?;
    cli.log.init()?;

    let mode = if cli.execute {
        DeliveryMode::Execute
    } else {
        DeliveryMode::Print
    };

    let input = read_stdin()?;
    let document = convert_str(&input, &options)?;
    info!(
        "event=convert module=cli status=ok items={} area={} mode={:?}",
        document
            .first()
            .map_or(0, |project| project.attributes.items.len()),
        options.area_name().is_some(),
        mode
    );

    deliver(&document, mode, &mut std::io::stdout().lock())?;
    Ok(())
}
