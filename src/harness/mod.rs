//! Sequential build-and-run test driver
//!
//! ## Modules
//!
//! - `candidate` - candidate discovery and artifact naming
//! - `interfaces` - toolchain seam over the external compiler
//! - `driver` - the per-candidate build/execute/cleanup loop
//! - `reporter` - progress reporting
//!
//! ## Failure model
//!
//! The driver distinguishes two failure classes. A compiler exiting
//! non-zero is recoverable: the captured output is reported and the run
//! is aborted, but the driver returns normally (`Ok(false)`). A produced
//! executable exiting non-zero, or an artifact missing at cleanup, is a
//! suite defect the harness has no answer for: it propagates as
//! [`HarnessError`] and terminates the run abnormally.

pub mod candidate;
pub mod driver;
pub mod interfaces;
pub mod reporter;

pub use candidate::{Candidate, SOURCE_EXTENSION, discover_candidates};
pub use driver::run_all;
pub use interfaces::{BuildOutcome, HarnessError, ProcessToolchain, Toolchain};
pub use reporter::{ConsoleReporter, HarnessReporter, RunSummary};
