//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands;

/// Generate Cromwell backend configuration for local and HPC runs
#[derive(Parser, Debug)]
#[command(name = "cromwell-hpc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write bcbio-cromwell.conf for a sample manifest
    Generate(commands::generate::GenerateArgs),

    /// Print the Cromwell command-line flags for the selected scheduler
    ClArgs(commands::cl_args::ClArgsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // A logger may already be installed when embedded; keep it.
        let _ = env_logger::Builder::new()
            .filter_level(self.log_level)
            .format_timestamp(None)
            .try_init();

        match self.command {
            Commands::Generate(args) => commands::generate::execute(args),
            Commands::ClArgs(args) => commands::cl_args::execute(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "cromwell-hpc",
            "generate",
            "samples.json",
            "-s",
            "slurm",
            "-q",
            "general",
            "-r",
            "timelimit=1:00:00",
            "-r",
            "account=lab",
            "-j",
            "4",
            "--no-container",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.sample_file.to_str(), Some("samples.json"));
                assert_eq!(args.run.scheduler.as_deref(), Some("slurm"));
                assert_eq!(args.run.queue.as_deref(), Some("general"));
                assert_eq!(args.run.resources, vec!["timelimit=1:00:00", "account=lab"]);
                assert_eq!(args.run.joblimit, 4);
                assert!(args.run.no_container);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_log_level() {
        let cli = Cli::try_parse_from(["cromwell-hpc", "--log-level", "debug", "cl-args"]).unwrap();
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_bad_log_level() {
        assert!(Cli::try_parse_from(["cromwell-hpc", "--log-level", "loud", "cl-args"]).is_err());
    }
}
