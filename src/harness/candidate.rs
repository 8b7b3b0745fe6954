//! Candidate discovery and artifact naming
//!
//! A candidate is a single `.acorn` source file sitting directly inside
//! the suite directory. The external compiler turns it into an executable
//! named after the file name up to the first `.`, so `fib.acorn` and
//! `fib.broken.acorn` both produce (and collide on) `fib`.

use std::fs;
use std::path::{Path, PathBuf};

use super::interfaces::HarnessError;

/// File extension recognized by the driver.
pub const SOURCE_EXTENSION: &str = "acorn";

/// A source file discovered for build-and-run testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Directory-relative file name, e.g. `fib.acorn`.
    file_name: String,
    /// Path the candidate was discovered at.
    path: PathBuf,
}

impl Candidate {
    /// Wrap a path as a candidate.
    ///
    /// Returns `None` when the path has no file name or the name is not
    /// valid UTF-8 (such entries cannot be passed to the compiler as a
    /// plain argument anyway).
    pub fn new(path: PathBuf) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        Some(Self { file_name, path })
    }

    /// Directory-relative file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Path the candidate was discovered at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the executable the compiler produces for this candidate:
    /// the file name up to the first `.`.
    pub fn artifact_name(&self) -> &str {
        self.file_name.split('.').next().unwrap_or(&self.file_name)
    }
}

/// Find all `*.acorn` files directly inside `dir`.
///
/// The scan is single-level: subdirectories are not descended into, and
/// hidden files are skipped. The result is sorted by file name so runs
/// are reproducible across platforms.
pub fn discover_candidates(dir: &Path) -> Result<Vec<Candidate>, HarnessError> {
    let entries = fs::read_dir(dir).map_err(|source| HarnessError::Discovery {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if name.starts_with('.') {
            continue;
        }
        if path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            if let Some(candidate) = Candidate::new(path) {
                candidates.push(candidate);
            }
        }
    }

    candidates.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(candidates)
}
