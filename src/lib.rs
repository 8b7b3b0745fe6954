#![forbid(unsafe_code)]
//! Acorn Test Harness
//!
//! Drives an already-built, external `acorn` compiler over a directory of
//! `.acorn` sources: each candidate file is compiled, the produced
//! executable is run, and the artifact is deleted again. The compiler and
//! the programs it emits are external collaborators; this crate only
//! sequences them and maps their exit statuses to outcomes.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!   The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod harness;

pub use harness::candidate::{Candidate, SOURCE_EXTENSION, discover_candidates};
pub use harness::driver::run_all;
pub use harness::interfaces::{BuildOutcome, HarnessError, ProcessToolchain, Toolchain};
pub use harness::reporter::{ConsoleReporter, HarnessReporter, RunSummary};
