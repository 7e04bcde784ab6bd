//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_manifest(manifests::GCS_SAMPLE);
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::manifests;
    pub use super::TestFixture;
}

/// Sample manifests used across tests.
#[allow(dead_code)]
pub mod manifests {
    /// A single BAM on Google Cloud Storage.
    pub const GCS_SAMPLE: &str = r#"[
  {
    "description": "sample1",
    "files": [{"class": "File", "path": "gs://bucket/sample.bam"}]
  }
]"#;

    /// Local inputs with an HTTP-hosted reference.
    pub const LOCAL_AND_HTTP: &str = r#"[
  {
    "description": "sample1",
    "files": [
      {"class": "File", "path": "/data/sample1_1.fq.gz"},
      {"class": "File", "path": "/data/sample1_2.fq.gz"}
    ],
    "reference": {
      "genome": {"class": "File", "path": "https://example.org/hg38.fa"}
    }
  }
]"#;

    /// No file references at all.
    pub const EMPTY: &str = "[]";
}

/// A temporary work directory holding a sample manifest.
pub struct TestFixture {
    pub temp: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp: assert_fs::TempDir::new().unwrap(),
        }
    }

    /// Write `samples.json` with the given content.
    pub fn with_manifest(self, content: &str) -> Self {
        self.temp.child("samples.json").write_str(content).unwrap();
        self
    }

    /// Write a custom Cromwell configuration to `custom.conf`.
    pub fn with_runconfig(self, content: &str) -> Self {
        self.temp.child("custom.conf").write_str(content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn manifest_path(&self) -> std::path::PathBuf {
        self.temp.path().join("samples.json")
    }

    pub fn runconfig_path(&self) -> std::path::PathBuf {
        self.temp.path().join("custom.conf")
    }

    pub fn output_path(&self) -> std::path::PathBuf {
        self.temp.path().join("bcbio-cromwell.conf")
    }

    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output_path()).unwrap()
    }
}
