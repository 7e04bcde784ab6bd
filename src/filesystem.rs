//! # Filesystem Type Detection
//!
//! Cromwell needs a filesystem stanza for every storage scheme the workflow
//! inputs live on. This module walks the sample manifest, collects every file
//! reference and classifies each one by its URI scheme.
//!
//! A file reference is any JSON object carrying a `class` key (the CWL
//! `File`/`Directory` record). Its `path` (or `location`) is the URI that gets
//! classified:
//!
//! - `gs:` → [`Scheme::Gcp`]
//! - `http:` / `https:` → [`Scheme::Http`]
//! - anything else → [`Scheme::Local`]
//!
//! When tools run inside containers every detected type is marked as such,
//! which selects container-friendly staging in the fragment library.

use log::debug;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Suffix marking a filesystem type used from inside a container.
pub const CONTAINER_SUFFIX: &str = "_container";

/// Storage scheme of a file reference.
///
/// Variant order matches the alphabetical order of the tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scheme {
    Gcp,
    Http,
    Local,
}

impl Scheme {
    /// Classify a path or URI by its scheme prefix.
    pub fn classify(path: &str) -> Self {
        if path.starts_with("gs:") {
            Scheme::Gcp
        } else if path.starts_with("https:") || path.starts_with("http:") {
            Scheme::Http
        } else {
            Scheme::Local
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Gcp => "gcp",
            Scheme::Http => "http",
            Scheme::Local => "local",
        }
    }
}

/// A detected filesystem type: a scheme plus whether it is accessed from
/// inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilesystemType {
    pub scheme: Scheme,
    pub container: bool,
}

impl FilesystemType {
    pub fn new(scheme: Scheme, container: bool) -> Self {
        Self { scheme, container }
    }

    /// Tag string, e.g. `gcp` or `gcp_container`.
    pub fn tag(&self) -> String {
        if self.container {
            format!("{}{}", self.scheme.as_str(), CONTAINER_SUFFIX)
        } else {
            self.scheme.as_str().to_string()
        }
    }
}

impl fmt::Display for FilesystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

/// Distinct filesystem types, iterated in tag order.
pub type FilesystemTypeSet = BTreeSet<FilesystemType>;

/// Schemes in use, ignoring the container marker.
pub fn schemes(types: &FilesystemTypeSet) -> BTreeSet<Scheme> {
    types.iter().map(|t| t.scheme).collect()
}

/// Collect every file path referenced anywhere in a manifest.
///
/// Objects with a `class` key are file records and are not descended into;
/// all other arrays and objects are walked at any depth.
pub fn file_paths(manifest: &Value) -> Vec<&str> {
    let mut out = Vec::new();
    visit(manifest, &mut out);
    out
}

fn visit<'a>(node: &'a Value, out: &mut Vec<&'a str>) {
    match node {
        Value::Array(items) => {
            for item in items {
                visit(item, out);
            }
        }
        Value::Object(map) if map.contains_key("class") => {
            match map
                .get("path")
                .or_else(|| map.get("location"))
                .and_then(Value::as_str)
            {
                Some(path) => out.push(path),
                None => debug!("Skipping file record without a path: {}", node),
            }
        }
        Value::Object(map) => {
            for value in map.values() {
                visit(value, out);
            }
        }
        _ => {}
    }
}

/// Detect the filesystem types referenced by a parsed manifest.
pub fn detect(manifest: &Value, containers: bool) -> FilesystemTypeSet {
    file_paths(manifest)
        .into_iter()
        .map(|path| FilesystemType::new(Scheme::classify(path), containers))
        .collect()
}

/// Read a JSON sample manifest from disk and detect its filesystem types.
pub fn detect_file(sample_file: &Path, containers: bool) -> Result<FilesystemTypeSet> {
    let manifest = read_manifest(sample_file)?;
    let types = detect(&manifest, containers);
    debug!(
        "Detected filesystem types in {}: [{}]",
        sample_file.display(),
        types
            .iter()
            .map(FilesystemType::tag)
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(types)
}

/// Load the sample manifest as a generic JSON value.
pub fn read_manifest(sample_file: &Path) -> Result<Value> {
    let content = fs::read_to_string(sample_file)?;
    serde_json::from_str(&content).map_err(|e| Error::Manifest {
        path: sample_file.display().to_string(),
        message: e.to_string(),
    })
}
