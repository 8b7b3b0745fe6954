//! The per-candidate build/execute/cleanup loop

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use super::candidate::discover_candidates;
use super::interfaces::{HarnessError, Toolchain};
use super::reporter::{HarnessReporter, RunSummary};

/// Run the build-and-run cycle over every `.acorn` file in `dir`.
///
/// Each candidate goes through: print its name, compile it with the
/// external compiler, run the produced artifact, delete the artifact.
/// A compiler exiting non-zero reports the captured output and aborts the
/// remaining candidates; the driver itself keeps going long enough to
/// return `Ok(false)`. An artifact exiting non-zero, or a missing
/// artifact at cleanup, is not recoverable and surfaces as `Err`.
///
/// Returns `Ok(true)` when every candidate's build step succeeded.
pub fn run_all(
    dir: &Path,
    toolchain: &dyn Toolchain,
    reporter: &mut dyn HarnessReporter,
) -> Result<bool, HarnessError> {
    let start = Instant::now();

    let candidates = discover_candidates(dir)?;
    debug!(dir = %dir.display(), count = candidates.len(), "discovered candidates");

    let mut passed = 0;
    let mut aborted = false;

    for candidate in &candidates {
        reporter.on_candidate_start(candidate);

        let build = toolchain.compile(candidate.file_name())?;
        if !build.success {
            reporter.on_build_failure(candidate, &build.output);
            aborted = true;
            break;
        }

        toolchain.execute(candidate.artifact_name())?;
        toolchain.remove_artifact(candidate.artifact_name())?;
        passed += 1;
    }

    reporter.on_run_complete(&RunSummary {
        passed,
        failed: usize::from(aborted),
        duration: start.elapsed(),
    });

    Ok(!aborted)
}
