//! Print the Cromwell command-line flags for a run, one per line.

use anyhow::Result;
use clap::Args;

use super::RunArgs;

/// Arguments for the cl-args command
#[derive(Args, Debug)]
pub struct ClArgsArgs {
    #[command(flatten)]
    pub run: RunArgs,
}

/// Execute the cl-args command
pub fn execute(args: ClArgsArgs) -> Result<()> {
    for flag in cromwell_hpc::args_to_cromwell_cl(&args.run.into())? {
        println!("{}", flag);
    }
    Ok(())
}
