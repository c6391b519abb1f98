//! CLI logic for the Synta tool.
//!
//! Both subcommands read the input file and hand the full contents to
//! the parser; the binary entry point turns the first error into a
//! nonzero exit status. `check` validates (optionally dumping the
//! document as JSON); `prune` prints the document with unreferenced
//! definitions removed.

mod args;

pub use args::{Args, Command};

use std::fs;
use std::io;

use log::info;
use thiserror::Error;

use synta_parser::ParseError;

/// The error type for CLI runs.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid syntax: {0}")]
    Parse(#[from] ParseError),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run the Synta CLI application
///
/// # Errors
///
/// Returns `CliError` for file I/O failures, parse failures, and JSON
/// encoding failures.
pub fn run(args: &Args) -> Result<(), CliError> {
    match &args.command {
        Command::Check { input, json } => {
            info!(input_path = input; "Checking synta file");

            let source = fs::read_to_string(input)?;
            let document = synta_parser::parse_str(&source)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&document)?);
            }

            info!(
                definitions = document.definitions().len();
                "Document is valid"
            );
        }
        Command::Prune { input } => {
            info!(input_path = input; "Pruning synta file");

            let source = fs::read_to_string(input)?;
            let document = synta_parser::parse_str(&source)?;
            let pruned = document.prune();

            print!("{pruned}");

            info!(
                kept = pruned.definitions().len(),
                total = document.definitions().len();
                "Pruned document"
            );
        }
    }

    Ok(())
}
