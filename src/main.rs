//! # Cromwell HPC CLI
//!
//! This is the binary entry point for the `cromwell-hpc` command-line tool.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Installing the logger and executing the selected command.
//! - Reporting errors from the library as a non-zero exit.
//!
//! The configuration logic lives in the `cromwell_hpc` library crate; the
//! binary is a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
