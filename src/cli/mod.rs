//! CLI for the Acorn test harness
//!
//! ## Usage
//!
//! - `acorn-harness` - build and run every `.acorn` file in the current directory
//! - `acorn-harness tests -c build/acornc` - scan `tests/` with an explicit compiler
//! - `acorn-harness --list` - print discovered candidates without building
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. Command
//! functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use crate::harness::{ConsoleReporter, ProcessToolchain, discover_candidates, run_all};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Build-and-run test harness for the Acorn compiler
#[derive(Parser, Debug)]
#[command(name = "acorn-harness")]
#[command(version = VERSION)]
#[command(about = "Build-and-run test harness for the Acorn compiler", long_about = None)]
pub struct Cli {
    /// Directory to scan for .acorn sources
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Path to the acorn compiler (relative paths resolve inside DIR)
    #[arg(
        short = 'c',
        long = "compiler",
        value_name = "PATH",
        default_value = "../build/acorn"
    )]
    pub compiler: PathBuf,

    /// Print a closing summary line
    #[arg(short, long)]
    pub verbose: bool,

    /// List discovered candidates without building them
    #[arg(long)]
    pub list: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the parsed invocation and return its exit code.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    if cli.list {
        return list_candidates(&cli.dir);
    }

    let toolchain = ProcessToolchain::new(cli.compiler, cli.dir.clone());
    let mut reporter = ConsoleReporter::new(cli.verbose);

    match run_all(&cli.dir, &toolchain, &mut reporter) {
        Ok(true) => Ok(ExitCode::SUCCESS),
        // The build failure was already reported by the console reporter;
        // all that is left is the exit code.
        Ok(false) => Err(CliError::new("", ExitCode::FAILURE)),
        Err(e) => Err(CliError::failure(format!("Error: {}", e))),
    }
}

/// Print discovered candidate file names, one per line.
fn list_candidates(dir: &Path) -> CliResult<ExitCode> {
    let candidates =
        discover_candidates(dir).map_err(|e| CliError::failure(format!("Error: {}", e)))?;

    for candidate in &candidates {
        println!("{}", candidate.file_name());
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["acorn-harness"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("."));
        assert_eq!(cli.compiler, PathBuf::from("../build/acorn"));
        assert!(!cli.verbose);
        assert!(!cli.list);
    }

    #[test]
    fn test_cli_parse_dir_and_compiler() {
        let cli = Cli::try_parse_from(["acorn-harness", "tests", "-c", "build/acornc"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("tests"));
        assert_eq!(cli.compiler, PathBuf::from("build/acornc"));
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::try_parse_from(["acorn-harness", "-v", "--list"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.list);
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["acorn-harness", "--parallel"]).is_err());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS.0, 0);
        assert_eq!(ExitCode::FAILURE.0, 1);
        assert_eq!(CliError::failure("boom").exit_code, ExitCode::FAILURE);
    }
}
