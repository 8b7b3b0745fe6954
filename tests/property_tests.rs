//! Property-based tests for artifact naming
//!
//! The artifact name contract (file name up to the first `.`) is what
//! ties the driver to the external compiler's output: both sides must
//! derive the same name or cleanup deletes the wrong thing. These
//! properties pin the derivation across arbitrary file names.

use std::path::PathBuf;

use acorn_harness::Candidate;
use proptest::prelude::*;

proptest! {
    /// The derived artifact name is exactly the text before the first dot.
    #[test]
    fn artifact_name_stops_at_first_dot(
        stem in "[a-z][a-z0-9_]{0,11}",
        middle in "[a-z0-9]{0,6}",
    ) {
        let file_name = if middle.is_empty() {
            format!("{stem}.acorn")
        } else {
            format!("{stem}.{middle}.acorn")
        };

        let candidate = Candidate::new(PathBuf::from(&file_name)).unwrap();
        prop_assert_eq!(candidate.artifact_name(), stem.as_str());
    }

    /// Whatever the file name, the artifact name is a dot-free prefix of it.
    #[test]
    fn artifact_name_is_dot_free_prefix(name in "[a-z][a-z0-9._]{0,16}\\.acorn") {
        let candidate = Candidate::new(PathBuf::from(&name)).unwrap();
        let artifact = candidate.artifact_name();

        prop_assert!(!artifact.contains('.'));
        prop_assert!(name.starts_with(artifact));
    }
}
