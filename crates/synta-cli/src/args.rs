//! Command-line argument definitions for the Synta CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments select the subcommand, the input file,
//! and the logging verbosity.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Synta tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse and validate a Synta file
    Check {
        /// Path to the input file
        input: String,

        /// Print the parsed document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove definitions not referenced by the filename template and
    /// print the result
    Prune {
        /// Path to the input file
        input: String,
    },
}
