//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `cromwell-hpc` command-line tool. Each subcommand is defined in its own
//! file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `cromwell_hpc` library.
//!
//! Both commands share [`RunArgs`], the flags that make up a
//! [`cromwell_hpc::RunArguments`].

pub mod cl_args;
pub mod generate;

use clap::Args;
use std::path::PathBuf;

use cromwell_hpc::RunArguments;

/// Run options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Scheduler to submit jobs through (slurm, sge, pbspro, torque, htcondor)
    #[arg(short, long, value_name = "NAME", env = "CROMWELL_HPC_SCHEDULER")]
    pub scheduler: Option<String>,

    /// Scheduler queue to submit jobs to
    #[arg(short, long, value_name = "QUEUE", env = "CROMWELL_HPC_QUEUE")]
    pub queue: Option<String>,

    /// Scheduler resources, as key=value or flag entries separated by ';'
    #[arg(short = 'r', long = "resources", value_name = "RESOURCES")]
    pub resources: Vec<String>,

    /// Maximum concurrent jobs (0 for no explicit limit)
    #[arg(short = 'j', long, value_name = "N", default_value_t = 0)]
    pub joblimit: u32,

    /// Run tools directly on the host instead of inside containers
    #[arg(long)]
    pub no_container: bool,

    /// Custom Cromwell configuration to take the database section from
    #[arg(long, value_name = "PATH", env = "CROMWELL_HPC_RUNCONFIG")]
    pub runconfig: Option<PathBuf>,
}

impl From<RunArgs> for RunArguments {
    fn from(args: RunArgs) -> Self {
        RunArguments {
            scheduler: args.scheduler,
            queue: args.queue,
            resources: args.resources,
            joblimit: args.joblimit,
            no_container: args.no_container,
            runconfig: args.runconfig,
        }
    }
}
