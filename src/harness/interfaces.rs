//! Toolchain seam over the external compiler
//!
//! The driver's subprocess invocations (compile, execute, artifact
//! cleanup) sit behind the `Toolchain` trait so the loop in `driver.rs`
//! can be exercised against a scripted stand-in instead of a real
//! compiler on disk. `ProcessToolchain` is the production implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

/// Errors that terminate the driver.
///
/// A compiler exiting non-zero is *not* represented here: that outcome is
/// recoverable and carried in [`BuildOutcome`]. These variants cover the
/// non-recoverable failures, which propagate straight to the CLI
/// boundary.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read directory '{dir}': {source}")]
    Discovery {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("artifact '{artifact}' exited with status {code}")]
    Execution { artifact: String, code: i32 },

    #[error("failed to delete artifact '{artifact}': {source}")]
    Cleanup {
        artifact: String,
        #[source]
        source: io::Error,
    },
}

/// Result of one compiler invocation.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Whether the compiler exited with status 0.
    pub success: bool,
    /// Combined stdout and stderr of the compiler.
    pub output: String,
}

/// The two external collaborators of the driver, plus artifact cleanup.
///
/// All operations are synchronous and block until the child exits.
pub trait Toolchain {
    /// Compile one candidate file. `file_name` is relative to the suite
    /// directory. Failure to start the compiler at all is an error;
    /// the compiler exiting non-zero is a `BuildOutcome` with
    /// `success == false`.
    fn compile(&self, file_name: &str) -> Result<BuildOutcome, HarnessError>;

    /// Run a produced artifact with no arguments. Returns `Ok(())` only
    /// for a zero exit status; a non-zero exit is `HarnessError::Execution`.
    fn execute(&self, artifact_name: &str) -> Result<(), HarnessError>;

    /// Delete a produced artifact. A missing artifact is
    /// `HarnessError::Cleanup`.
    fn remove_artifact(&self, artifact_name: &str) -> Result<(), HarnessError>;
}

/// Production toolchain: shells out to the external compiler and to the
/// executables it produces.
///
/// Every invocation runs with the suite directory as its working
/// directory, so relative compiler paths (the historical
/// `../build/acorn` layout) and the bare artifact names both resolve
/// inside the suite directory.
pub struct ProcessToolchain {
    compiler: PathBuf,
    workdir: PathBuf,
}

impl ProcessToolchain {
    pub fn new(compiler: impl Into<PathBuf>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            compiler: compiler.into(),
            workdir: workdir.into(),
        }
    }
}

impl Toolchain for ProcessToolchain {
    fn compile(&self, file_name: &str) -> Result<BuildOutcome, HarnessError> {
        debug!(compiler = %self.compiler.display(), file = file_name, "build step");

        let output = Command::new(&self.compiler)
            .arg(file_name)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| HarnessError::Spawn {
                program: self.compiler.clone(),
                source,
            })?;

        // Callers only ever see the two streams merged.
        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&stderr);
        }

        Ok(BuildOutcome {
            success: output.status.success(),
            output: combined,
        })
    }

    fn execute(&self, artifact_name: &str) -> Result<(), HarnessError> {
        debug!(artifact = artifact_name, "execute step");

        // Explicit `./` prefix so the lookup never falls back to PATH.
        let artifact_path = Path::new(".").join(artifact_name);

        // Inherited stdio: the program's output streams to the terminal
        // in real time.
        let status = Command::new(&artifact_path)
            .current_dir(&self.workdir)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| HarnessError::Spawn {
                program: artifact_path,
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(HarnessError::Execution {
                artifact: artifact_name.to_string(),
                code: status.code().unwrap_or(-1),
            })
        }
    }

    fn remove_artifact(&self, artifact_name: &str) -> Result<(), HarnessError> {
        debug!(artifact = artifact_name, "cleanup");

        fs::remove_file(self.workdir.join(artifact_name)).map_err(|source| {
            HarnessError::Cleanup {
                artifact: artifact_name.to_string(),
                source,
            }
        })
    }
}
