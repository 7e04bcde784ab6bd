//! Run arguments handed over by the caller.
//!
//! `RunArguments` is the already-validated set of choices made on the command
//! line: which scheduler to target, the queue, resource overrides, the local
//! job limit, container usage and an optional custom Cromwell configuration.
//! Generation only ever reads it.

use serde::Deserialize;
use std::path::PathBuf;

/// Scheduler identifier that selects local execution.
pub const NO_SCHEDULER: &str = "none";

/// Run-time choices for a single configuration generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunArguments {
    /// Scheduler identifier (`slurm`, `sge`, ...). `None`, empty or `"none"`
    /// means the run executes locally.
    pub scheduler: Option<String>,
    /// Queue to submit jobs to.
    pub queue: Option<String>,
    /// Raw resource overrides, each `key=value` or a bare flag, optionally
    /// holding several `;`-separated entries.
    pub resources: Vec<String>,
    /// Maximum number of concurrent jobs. `0` requests no explicit limit.
    pub joblimit: u32,
    /// Run tools directly on the host instead of inside containers.
    pub no_container: bool,
    /// Custom Cromwell configuration to take overrides from.
    pub runconfig: Option<PathBuf>,
}

impl RunArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scheduler(mut self, scheduler: impl Into<String>) -> Self {
        self.scheduler = Some(scheduler.into());
        self
    }

    pub fn with_queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = Some(queue.into());
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resources.push(resource.into());
        self
    }

    pub fn with_joblimit(mut self, joblimit: u32) -> Self {
        self.joblimit = joblimit;
        self
    }

    pub fn with_no_container(mut self, no_container: bool) -> Self {
        self.no_container = no_container;
        self
    }

    pub fn with_runconfig(mut self, path: impl Into<PathBuf>) -> Self {
        self.runconfig = Some(path.into());
        self
    }

    /// The scheduler identifier, or `None` for a local run.
    pub fn requested_scheduler(&self) -> Option<&str> {
        self.scheduler
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(NO_SCHEDULER))
    }

    /// The queue name, treating an empty string as absent.
    pub fn requested_queue(&self) -> Option<&str> {
        self.queue.as_deref().filter(|q| !q.is_empty())
    }

    /// Whether tools run inside containers.
    pub fn containers_enabled(&self) -> bool {
        !self.no_container
    }

    /// Job limit the generated configuration enforces.
    ///
    /// A local run without an explicit limit is capped at one job so the
    /// engine does not oversubscribe the machine.
    pub fn effective_joblimit(&self) -> u32 {
        if self.joblimit == 0 && self.requested_scheduler().is_none() {
            1
        } else {
            self.joblimit
        }
    }
}
