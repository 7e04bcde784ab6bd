//! Generate command implementation
//!
//! Writes `bcbio-cromwell.conf` for a sample manifest into the work directory
//! and prints the path of the written file.

use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use std::path::PathBuf;

use cromwell_hpc::RunArguments;

use super::RunArgs;

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Sample manifest (JSON) describing the workflow inputs
    #[arg(value_name = "SAMPLE_FILE")]
    pub sample_file: PathBuf,

    /// Directory to write the configuration into (defaults to current directory)
    #[arg(short = 'w', long, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs) -> Result<()> {
    let work_dir = match args.work_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    if !work_dir.is_dir() {
        anyhow::bail!("Work directory not found: {}", work_dir.display());
    }

    let run: RunArguments = args.run.into();
    debug!("Generating configuration with {:?}", run);

    let out_file = cromwell_hpc::create_cromwell_config(&run, &work_dir, &args.sample_file)?;
    println!("{}", out_file.display());
    Ok(())
}
