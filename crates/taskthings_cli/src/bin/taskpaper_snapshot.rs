//! `taskpaper-snapshot` entry point.
//!
//! Reads the editor's displayed items (JSON array on stdin) and prints the
//! reconstructed outline tree, ready to pipe into `taskpaper-to-things`.

use clap::Parser;
use std::process::ExitCode;
use taskthings_cli::{read_stdin, CliError, LogArgs};
use taskthings_core::{snapshot_outline, EditorItem, OrphanPolicy};

/// Rebuild the outline tree from a flat list of editor items.
#[derive(Debug, Parser)]
#[command(name = "taskpaper-snapshot", version)]
struct Cli {
    /// Drop items whose parent is missing instead of failing.
    #[arg(long)]
    skip_orphans: bool,
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
    cli.log.init()?;

    let policy = if cli.skip_orphans {
        OrphanPolicy::Skip
    } else {
        OrphanPolicy::Reject
    };

    let input = read_stdin()?;
    let items: Vec<EditorItem> = serde_json::from_str(input.trim()).map_err(CliError::Input)?;
    let tree = snapshot_outline(&items, policy)?;
    println!("{tree}");
    Ok(())
}
