//! # Cromwell HPC Configuration
//!
//! This library generates the backend configuration Cromwell needs to run a
//! CWL workflow locally or through an HPC scheduler. It is used by the
//! `cromwell-hpc` command-line tool but can be called directly by anything
//! that launches Cromwell.
//!
//! ## Quick Example
//!
//! ```
//! use cromwell_hpc::{render_config, RunArguments};
//! use serde_json::json;
//! use std::path::Path;
//!
//! let args = RunArguments::new()
//!     .with_scheduler("slurm")
//!     .with_queue("general")
//!     .with_resource("timelimit=2-00:00");
//! let manifest = json!([{"bam": {"class": "File", "path": "gs://bucket/sample.bam"}}]);
//!
//! let config = render_config(&args, Path::new("/work"), &manifest).unwrap();
//! assert!(config.text.contains("SLURM {"));
//! assert!(config.text.contains("String timelimit = \"2-00:00\""));
//! assert!(config.path.ends_with("bcbio-cromwell.conf"));
//!
//! let flags = cromwell_hpc::args_to_cromwell_cl(&args).unwrap();
//! assert_eq!(flags, vec!["-Dbackend.default=SLURM"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Run arguments (`args`)**: The caller's choices: scheduler, queue,
//!   resource overrides, job limit, container usage and a custom config.
//! - **Filesystem detection (`filesystem`)**: Classifies every file in the
//!   sample manifest as local, HTTP or Google Cloud Storage.
//! - **Scheduler translation (`scheduler`)**: Per-scheduler defaults, value
//!   prefixes and shorthands turned into backend parameters.
//! - **Overrides (`overrides`)**: The `database` section of a user-supplied
//!   HOCON configuration.
//! - **Fragments (`fragments`, `template`)**: Static configuration text with
//!   `{{name}}` placeholders that must all be bound when rendered.
//! - **Assembly (`assemble`)**: Composes everything and writes
//!   `bcbio-cromwell.conf`.

pub mod args;
pub mod assemble;
pub mod error;
pub mod filesystem;
pub mod fragments;
pub mod overrides;
pub mod scheduler;
pub mod template;

#[cfg(test)]
mod filesystem_proptest;

pub use args::RunArguments;
pub use assemble::{create_cromwell_config, render_config, AssembledConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use scheduler::{args_to_cromwell, args_to_cromwell_cl, Scheduler};
