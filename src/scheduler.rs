//! # Scheduler Argument Translation
//!
//! Converts the scheduler selection and resource overrides of a run into:
//!
//! 1. Cromwell command-line flags (`-Dbackend.default=SLURM`), and
//! 2. the parameter mapping used to fill in the scheduler's backend fragment.
//!
//! Each supported scheduler has a static [`SchedulerProfile`] holding its
//! default parameters, per-key value prefixes and bare-flag shorthands. The
//! per-run mapping always starts from a fresh copy of the defaults.
//!
//! Resource overrides are `;`-separated tokens:
//!
//! - `key=value` sets `key` to the registered prefix for that key followed by
//!   `value` (e.g. `account=proj` on PBS Pro becomes `-A proj`).
//! - `key` alone applies the matching shorthand, if any.
//!
//! Anything else is skipped. Later tokens win over earlier ones.

use log::debug;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::args::RunArguments;
use crate::error::{Error, Result};

/// Supported scheduler backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scheduler {
    Slurm,
    Sge,
    PbsPro,
    Torque,
    HtCondor,
}

impl Scheduler {
    pub const ALL: [Scheduler; 5] = [
        Scheduler::Slurm,
        Scheduler::Sge,
        Scheduler::PbsPro,
        Scheduler::Torque,
        Scheduler::HtCondor,
    ];

    /// Identifier used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Scheduler::Slurm => "slurm",
            Scheduler::Sge => "sge",
            Scheduler::PbsPro => "pbspro",
            Scheduler::Torque => "torque",
            Scheduler::HtCondor => "htcondor",
        }
    }

    /// Canonical backend name used as the Cromwell provider key.
    pub fn backend_name(&self) -> String {
        self.name().to_uppercase()
    }

    /// HTCondor manages its own pool; every other scheduler needs a queue.
    pub fn requires_queue(&self) -> bool {
        !matches!(self, Scheduler::HtCondor)
    }

    pub fn profile(&self) -> &'static SchedulerProfile {
        match self {
            Scheduler::Slurm => &SLURM,
            Scheduler::Sge => &SGE,
            Scheduler::PbsPro => &PBSPRO,
            Scheduler::Torque => &TORQUE,
            Scheduler::HtCondor => &HTCONDOR,
        }
    }
}

impl fmt::Display for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheduler {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Scheduler::ALL
            .into_iter()
            .find(|scheduler| scheduler.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnsupportedScheduler {
                scheduler: s.to_string(),
            })
    }
}

/// Static per-scheduler parameter tables.
#[derive(Debug)]
pub struct SchedulerProfile {
    /// Default parameter values.
    pub defaults: &'static [(&'static str, &'static str)],
    /// Literal prefixes placed before user-supplied values, by key.
    pub prefixes: &'static [(&'static str, &'static str)],
    /// Bare flags expanding to `(key, value)` assignments.
    pub shorthands: &'static [(&'static str, (&'static str, &'static str))],
}

impl SchedulerProfile {
    /// A fresh, owned copy of the default parameters.
    pub fn defaults(&self) -> BTreeMap<String, String> {
        self.defaults
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    pub fn prefix(&self, key: &str) -> &'static str {
        self.prefixes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, prefix)| *prefix)
            .unwrap_or("")
    }

    pub fn shorthand(&self, flag: &str) -> Option<(&'static str, &'static str)> {
        self.shorthands
            .iter()
            .find(|(f, _)| *f == flag)
            .map(|(_, target)| *target)
    }
}

static SLURM: SchedulerProfile = SchedulerProfile {
    defaults: &[("timelimit", "1-00:00"), ("account", "")],
    prefixes: &[],
    shorthands: &[],
};

static SGE: SchedulerProfile = SchedulerProfile {
    defaults: &[("memtype", "mem_type"), ("pename", "smp")],
    prefixes: &[],
    shorthands: &[],
};

static PBSPRO: SchedulerProfile = SchedulerProfile {
    defaults: &[
        ("walltime", "24:00:00"),
        ("account", ""),
        (
            "cpu_and_mem",
            "-l select=1:ncpus=${cpu}:mem=${memory_mb}mb",
        ),
    ],
    prefixes: &[("account", "-A ")],
    shorthands: &[(
        "noselect",
        ("cpu_and_mem", "-l ncpus=${cpu} -l mem=${memory_mb}mb"),
    )],
};

static TORQUE: SchedulerProfile = SchedulerProfile {
    defaults: &[("walltime", "24:00:00"), ("account", "")],
    prefixes: &[],
    shorthands: &[],
};

static HTCONDOR: SchedulerProfile = SchedulerProfile {
    defaults: &[],
    prefixes: &[],
    shorthands: &[],
};

/// Result of translating run arguments for Cromwell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulerTranslation {
    /// Extra Cromwell command-line flags.
    pub cl_args: Vec<String>,
    /// Parameters for the scheduler's backend fragment.
    pub params: BTreeMap<String, String>,
    /// Selected scheduler, `None` for local runs.
    pub scheduler: Option<Scheduler>,
}

/// Translate run arguments into Cromwell flags and scheduler parameters.
pub fn args_to_cromwell(args: &RunArguments) -> Result<SchedulerTranslation> {
    let Some(requested) = args.requested_scheduler() else {
        return Ok(SchedulerTranslation::default());
    };
    let scheduler: Scheduler = requested.parse()?;
    let queue = args.requested_queue();
    if queue.is_none() && scheduler.requires_queue() {
        return Err(Error::MissingQueue {
            scheduler: scheduler.to_string(),
        });
    }

    let profile = scheduler.profile();
    let mut params = profile.defaults();
    params.insert("queue".to_string(), queue.unwrap_or_default().to_string());
    for resource in &args.resources {
        apply_resource(scheduler, profile, resource, &mut params);
    }

    Ok(SchedulerTranslation {
        cl_args: vec![format!("-Dbackend.default={}", scheduler.backend_name())],
        params,
        scheduler: Some(scheduler),
    })
}

/// Cromwell command-line flags for a run.
pub fn args_to_cromwell_cl(args: &RunArguments) -> Result<Vec<String>> {
    Ok(args_to_cromwell(args)?.cl_args)
}

fn apply_resource(
    scheduler: Scheduler,
    profile: &SchedulerProfile,
    resource: &str,
    params: &mut BTreeMap<String, String>,
) {
    for token in resource.split(';') {
        let parts: Vec<&str> = token.split('=').collect();
        match parts.as_slice() {
            [key, value] => {
                params.insert(key.to_string(), format!("{}{}", profile.prefix(key), value));
            }
            [flag] => match profile.shorthand(flag) {
                Some((key, value)) => {
                    params.insert(key.to_string(), value.to_string());
                }
                None => debug!("Ignoring unknown {} resource flag '{}'", scheduler, flag),
            },
            _ => debug!("Ignoring malformed {} resource '{}'", scheduler, token),
        }
    }
}
