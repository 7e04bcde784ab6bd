//! Static Cromwell configuration fragments.
//!
//! Every fragment is a [`Template`] with `{{name}}` placeholders. Cromwell's
//! own `${...}` expressions inside submit scripts are part of the output and
//! are left untouched.

use crate::filesystem::{FilesystemType, Scheme};
use crate::scheduler::Scheduler;
use crate::template::Template;

/// Runtime attributes for Docker-enabled runs.
pub const DOCKER_ATTRS: &[&str] = &["String? docker", "String? docker_user"];

/// Runtime attributes CWL resource requirements map onto.
pub const CWL_ATTRS: &[&str] = &[
    "Int? cpuMin",
    "Int? cpuMax",
    "Int? memoryMin",
    "Int? memoryMax",
    "String? outDirMin",
    "String? outDirMax",
    "String? tmpDirMin",
    "String? tmpDirMax",
];

/// Separator between runtime attribute declarations.
pub const ATTR_SEPARATOR: &str = "\n        ";

/// Disables Cromwell's default docker submission for the Local backend.
pub const SUBMIT_DOCKER_DISABLED: &str = r#"submit-docker: """#;

/// Filesystem stanza for one detected filesystem type.
pub fn filesystem_fragment(fs_type: FilesystemType) -> &'static str {
    match (fs_type.scheme, fs_type.container) {
        (Scheme::Gcp, false) => GCP,
        (Scheme::Gcp, true) => GCP_CONTAINER,
        (Scheme::Http, _) => HTTP,
        (Scheme::Local, false) => LOCAL,
        (Scheme::Local, true) => LOCAL_CONTAINER,
    }
}

const GCP: &str = r#"
        gcs {
          auth = "application-default"
          caching {
            duplication-strategy = "reference"
          }
        }
  "#;

const GCP_CONTAINER: &str = r#"
        gcs {
          auth = "application-default"
          caching {
            duplication-strategy = "copy"
          }
        }
  "#;

const HTTP: &str = r#"
        http { }
  "#;

const LOCAL: &str = r#"
        local {
          localization: ["soft-link"]
          caching {
            duplication-strategy: ["soft-link"]
            hashing-strategy: "path"
          }
        }
"#;

// Soft links do not resolve inside container mounts.
const LOCAL_CONTAINER: &str = r#"
        local {
          localization: ["hard-link", "copy"]
          caching {
            duplication-strategy: ["hard-link", "copy"]
            hashing-strategy: "path"
          }
        }
"#;

/// Default embedded HSQLDB database, persisted under the work directory.
pub const DATABASE: Template<'static> = Template::new(
    r#"
database {
  profile = "slick.jdbc.HsqldbProfile$"
  db {
    driver = "org.hsqldb.jdbcDriver"
    url = "jdbc:hsqldb:file:{{work_dir}}/persist/metadata;shutdown=false;hsqldb.tx=mvcc"
    connectionTimeout = 200000
  }
}
"#,
);

/// Application-default credentials for Google Cloud access.
pub const AUTH_GOOGLE: &str = r#"
google {
  application-name = "cromwell"
  auths = [
    {
      name = "application-default"
      scheme = "application_default"
    }
  ]
}
"#;

/// Top-level Cromwell configuration.
pub const CROMWELL: Template<'static> = Template::new(
    r#"
include required(classpath("application"))

system {
  workflow-restart = true
}
call-caching {
  enabled = true
}
load-control {
  # Avoid watching memory, since the load-controller stops jobs on local runs
  memory-threshold-in-mb = 1
}

cwltool-runner {
  # Use external cwltool to avoid slow runtimes with java embedded pre-processing
  class = "cwl.CwltoolProcess"
}

{{database}}

{{engine}}

backend {
  providers {
    Local {
      config {
        {{joblimit}}
        runtime-attributes = """
        Int? cpu
        Int? memory_mb
        {{docker_attrs}}
        {{cwl_attrs}}
        """
        {{submit_docker}}
        {{filesystem}}
      }
    }
{{hpc}}
  }
}
"#,
);

/// Backend provider fragment for a scheduler.
pub fn scheduler_fragment(scheduler: Scheduler) -> Template<'static> {
    match scheduler {
        Scheduler::Slurm => SLURM,
        Scheduler::Sge => SGE,
        Scheduler::PbsPro => PBSPRO,
        Scheduler::Torque => TORQUE,
        Scheduler::HtCondor => HTCONDOR,
    }
}

const SLURM: Template<'static> = Template::new(
    r#"
    SLURM {
      actor-factory = "cromwell.backend.impl.sfs.config.ConfigBackendLifecycleActorFactory"
      config {
        {{joblimit}}
        runtime-attributes = """
        Int cpu = 1
        Int memory_mb = 2048
        String queue = "{{queue}}"
        String timelimit = "{{timelimit}}"
        String account = "{{account}}"
        {{docker_attrs}}
        {{cwl_attrs}}
        """
        submit = """
            sbatch -J ${job_name} -D ${cwd} -o ${out} -e ${err} -t ${timelimit} -p ${queue} \
            ${"--cpus-per-task=" + cpu} --mem=${memory_mb} ${account} \
            --wrap "/usr/bin/env bash ${script}"
        """
        kill = "scancel ${job_id}"
        check-alive = "squeue -j ${job_id}"
        job-id-regex = "Submitted batch job (\\d+).*"
        {{filesystem}}
      }
    }
"#,
);

const SGE: Template<'static> = Template::new(
    r#"
    SGE {
      actor-factory = "cromwell.backend.impl.sfs.config.ConfigBackendLifecycleActorFactory"
      config {
        {{joblimit}}
        runtime-attributes = """
        Int cpu = 1
        Int memory_mb = 2048
        String queue = "{{queue}}"
        String pename = "{{pename}}"
        String memtype = "{{memtype}}"
        {{docker_attrs}}
        {{cwl_attrs}}
        """
        submit = """
        qsub -V -w w -j y -N ${job_name} -wd ${cwd} \
        -o ${out} -e ${err} -q ${queue} \
        -pe ${pename} ${cpu} ${"-l " + memtype + "=" + memory_mb + "m"} \
        /usr/bin/env bash ${script}
        """
        kill = "qdel ${job_id}"
        check-alive = "qstat -j ${job_id}"
        job-id-regex = "(\\d+)"
        {{filesystem}}
      }
    }
"#,
);

const PBSPRO: Template<'static> = Template::new(
    r#"
    PBSPRO {
      actor-factory = "cromwell.backend.impl.sfs.config.ConfigBackendLifecycleActorFactory"
      config {
        {{joblimit}}
        runtime-attributes = """
        Int cpu = 1
        Int memory_mb = 2048
        String queue = "{{queue}}"
        String account = "{{account}}"
        String walltime = "{{walltime}}"
        {{docker_attrs}}
        {{cwl_attrs}}
        """
        submit = """
        qsub -V -l wd -N ${job_name} -o ${out} -e ${err} -q ${queue} -l walltime=${walltime} \
        {{cpu_and_mem}} \
        -- /usr/bin/env bash ${script}
        """
        kill = "qdel ${job_id}"
        check-alive = "qstat -j ${job_id}"
        job-id-regex = "(\\d+).*"
        {{filesystem}}
      }
    }

"#,
);

const TORQUE: Template<'static> = Template::new(
    r#"
    TORQUE {
      actor-factory = "cromwell.backend.impl.sfs.config.ConfigBackendLifecycleActorFactory"
      config {
        {{joblimit}}
        runtime-attributes = """
        Int cpu = 1
        Int memory_mb = 2048
        String queue = "{{queue}}"
        String account = "{{account}}"
        String walltime = "{{walltime}}"
        {{docker_attrs}}
        {{cwl_attrs}}
        """
        submit = """
        qsub -V -d ${cwd} -N ${job_name} -o ${out} -e ${err} -q ${queue} \
        -l nodes=1:ppn=${cpu} -l mem=${memory_mb}mb -l walltime=${walltime} \
        ${script}
        """
        kill = "qdel ${job_id}"
        check-alive = "qstat ${job_id}"
        job-id-regex = "(\\d+).*"
        {{filesystem}}
      }
    }
"#,
);

const HTCONDOR: Template<'static> = Template::new(
    r#"
    HTCONDOR {
      actor-factory = "cromwell.backend.impl.sfs.config.ConfigBackendLifecycleActorFactory"
      config {
        {{joblimit}}
        runtime-attributes = """
          Int cpu = 1
          Float memory_mb = 512.0
          Float disk_kb = 256000.0
          String? nativeSpecs
          {{docker_attrs}}
          {{cwl_attrs}}
        """
        submit = """
          chmod 755 ${script}
          cat > ${cwd}/execution/submitFile <<EOF
          Iwd=${cwd}/execution
          requirements=${nativeSpecs}
          leave_in_queue=true
          request_memory=${memory_mb}
          request_disk=${disk_kb}
          error=${err}
          output=${out}
          log_xml=true
          request_cpus=${cpu}
          executable=${script}
          log=${cwd}/execution/execution.log
          description=${job_name}
          getenv=true
          queue
          EOF
          condor_submit ${cwd}/execution/submitFile
        """
        kill = "condor_rm ${job_id}"
        check-alive = "condor_q ${job_id}"
        job-id-regex = "(?sm).*cluster (\\d+)..*"
        {{filesystem}}
      }
    }
"#,
);
