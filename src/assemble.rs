//! # Configuration Assembly
//!
//! Composes the Cromwell configuration for a run and writes it into the work
//! directory.
//!
//! ## Process
//!
//! 1.  **Overrides**: Load the `database` section of the custom configuration,
//!     if one was given.
//!
//! 2.  **Detection**: Find the filesystem types the sample manifest refers to.
//!
//! 3.  **Translation**: Turn the scheduler selection and resource overrides
//!     into scheduler parameters.
//!
//! 4.  **Rendering**: Fill the shared values (docker attributes, job limit,
//!     filesystems, database, engine filesystems) into the Local provider and,
//!     when a scheduler is active, into that scheduler's provider.
//!
//! 5.  **Output**: Write the text to `bcbio-cromwell.conf` in a single write.
//!
//! Every failure happens before step 5, so either the complete file is
//! written or nothing is.

use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::args::RunArguments;
use crate::error::Result;
use crate::filesystem::{self, FilesystemTypeSet, Scheme};
use crate::fragments;
use crate::overrides::{self, CustomOverrides};
use crate::scheduler::{self, SchedulerTranslation};
use crate::template::{vars, Vars};

/// File name of the generated configuration inside the work directory.
pub const CONFIG_FILE_NAME: &str = "bcbio-cromwell.conf";

/// A fully rendered configuration and the path it belongs at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledConfig {
    pub path: PathBuf,
    pub text: String,
}

impl AssembledConfig {
    /// Write the configuration, replacing any existing file.
    pub fn write(&self) -> Result<&Path> {
        fs::write(&self.path, &self.text)?;
        info!("Wrote Cromwell configuration to {}", self.path.display());
        Ok(&self.path)
    }
}

/// Generate the Cromwell configuration for a run and write it to
/// `<work_dir>/bcbio-cromwell.conf`.
pub fn create_cromwell_config(
    args: &RunArguments,
    work_dir: &Path,
    sample_file: &Path,
) -> Result<PathBuf> {
    let manifest = filesystem::read_manifest(sample_file)?;
    let config = render_config(args, work_dir, &manifest)?;
    config.write()?;
    Ok(config.path)
}

/// Render the configuration in memory from an already-parsed manifest.
pub fn render_config(
    args: &RunArguments,
    work_dir: &Path,
    manifest: &Value,
) -> Result<AssembledConfig> {
    let custom = overrides::load_custom_config(args.runconfig.as_deref())?;
    let file_types = filesystem::detect(manifest, args.containers_enabled());
    debug!(
        "Filesystem types: [{}]",
        file_types
            .iter()
            .map(|t| t.tag())
            .collect::<Vec<_>>()
            .join(", ")
    );
    let translation = scheduler::args_to_cromwell(args)?;

    let text = render_text(args, work_dir, &file_types, &custom, &translation)?;
    Ok(AssembledConfig {
        path: work_dir.join(CONFIG_FILE_NAME),
        text,
    })
}

/// Render the configuration text from its resolved inputs.
pub fn render_text(
    args: &RunArguments,
    work_dir: &Path,
    file_types: &FilesystemTypeSet,
    custom: &CustomOverrides,
    translation: &SchedulerTranslation,
) -> Result<String> {
    let shared = shared_values(args, work_dir, file_types, custom)?;

    let hpc = match translation.scheduler {
        Some(scheduler) => {
            let mut conf_args = translation.params.clone();
            conf_args.extend(shared.clone());
            fragments::scheduler_fragment(scheduler).render(&conf_args)?
        }
        None => String::new(),
    };

    let mut main_config = shared;
    main_config.insert("hpc".to_string(), hpc);
    fragments::CROMWELL.render(&main_config)
}

/// Values shared by the Local provider and the scheduler provider.
pub fn shared_values(
    args: &RunArguments,
    work_dir: &Path,
    file_types: &FilesystemTypeSet,
    custom: &CustomOverrides,
) -> Result<Vars> {
    let containers = args.containers_enabled();
    let joblimit = args.effective_joblimit();

    let database = match &custom.database {
        Some(database) => database.clone(),
        None => fragments::DATABASE.render(&vars([(
            "work_dir",
            work_dir.display().to_string(),
        )]))?,
    };

    Ok(vars([
        (
            "docker_attrs",
            if containers {
                fragments::DOCKER_ATTRS.join(fragments::ATTR_SEPARATOR)
            } else {
                String::new()
            },
        ),
        (
            "submit_docker",
            if containers {
                String::new()
            } else {
                fragments::SUBMIT_DOCKER_DISABLED.to_string()
            },
        ),
        (
            "joblimit",
            if joblimit > 0 {
                format!("concurrent-job-limit = {}", joblimit)
            } else {
                String::new()
            },
        ),
        ("cwl_attrs", fragments::CWL_ATTRS.join(fragments::ATTR_SEPARATOR)),
        ("filesystem", filesystem_config(file_types)),
        ("database", database),
        ("engine", engine_filesystem_config(file_types)),
    ]))
}

/// The `filesystems { }` block for the detected types, in tag order.
pub fn filesystem_config(file_types: &FilesystemTypeSet) -> String {
    let mut out = String::from("     filesystems {\n");
    for fs_type in file_types {
        out.push_str(fragments::filesystem_fragment(*fs_type));
    }
    out.push_str("      }\n");
    out
}

/// Authentication and engine-level filesystems for remote inputs.
pub fn engine_filesystem_config(file_types: &FilesystemTypeSet) -> String {
    let schemes = filesystem::schemes(file_types);
    let gcp = schemes.contains(&Scheme::Gcp);
    let http = schemes.contains(&Scheme::Http);

    let mut out = String::new();
    if gcp {
        out.push_str(fragments::AUTH_GOOGLE);
    }
    if gcp || http {
        out.push_str("engine {\n");
        out.push_str("  filesystems {\n");
        if gcp {
            out.push_str("    gcs {\n");
            out.push_str("      auth = \"application-default\"\n");
            out.push_str("    }\n");
        }
        if http {
            out.push_str("    http {}\n");
        }
        out.push_str("  }\n");
        out.push_str("}\n");
    }
    out
}
