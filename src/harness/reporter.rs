//! Progress reporting for the driver
//!
//! Reporting is separated from execution behind the `HarnessReporter`
//! trait so alternative output formats can be slotted in without touching
//! the driver loop.

use std::time::Duration;

use super::candidate::Candidate;

/// Summary of a completed (or aborted) run.
#[derive(Debug)]
pub struct RunSummary {
    /// Candidates whose build and execute steps both completed.
    pub passed: usize,
    /// 1 when the run was aborted by a build failure, 0 otherwise.
    pub failed: usize,
    /// Wall time of the whole run.
    pub duration: Duration,
}

/// Trait for reporting driver progress.
pub trait HarnessReporter {
    /// Called with each candidate before its build step.
    fn on_candidate_start(&mut self, candidate: &Candidate);

    /// Called when the compiler exits non-zero. `output` is the captured
    /// combined stdout/stderr of the compiler.
    fn on_build_failure(&mut self, candidate: &Candidate, output: &str);

    /// Called once after the loop ends, whether it completed or was
    /// aborted by a build failure.
    fn on_run_complete(&mut self, _summary: &RunSummary) {}
}

/// Default console reporter.
///
/// Matches the historical suite output: candidate file names as progress,
/// the compiler's captured output plus a `Fail!` marker on build failure.
/// The closing summary line only appears in verbose mode, so a run over
/// an empty directory stays silent.
#[derive(Default)]
pub struct ConsoleReporter {
    pub verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl HarnessReporter for ConsoleReporter {
    fn on_candidate_start(&mut self, candidate: &Candidate) {
        println!("{}", candidate.file_name());
    }

    fn on_build_failure(&mut self, _candidate: &Candidate, output: &str) {
        println!("{}", output);
        println!("Fail!");
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        if !self.verbose {
            return;
        }

        let mut parts = Vec::new();
        if summary.passed > 0 {
            parts.push(format!("{} passed", summary.passed));
        }
        if summary.failed > 0 {
            parts.push(format!("{} failed", summary.failed));
        }
        if parts.is_empty() {
            parts.push("no candidates".to_string());
        }

        println!(
            "====== {} in {:.2}s ======",
            parts.join(", "),
            summary.duration.as_secs_f64()
        );
    }
}
