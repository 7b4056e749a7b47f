//! Property-based tests for the block-wise comparator.

use crossdupe::compare::{files_equal, READ_BLOCK};
use proptest::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, contents: &[u8]) {
    File::create(path).unwrap().write_all(contents).unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The comparator agrees with byte-vector equality for arbitrary
    /// binary content, including NULs and block-boundary lengths.
    #[test]
    fn comparator_matches_byte_equality(
        a in proptest::collection::vec(any::<u8>(), 0..(READ_BLOCK * 2 + 8)),
        b in proptest::collection::vec(any::<u8>(), 0..(READ_BLOCK * 2 + 8)),
    ) {
        let dir = tempdir().unwrap();
        let path_a = dir.path().join("a");
        let path_b = dir.path().join("b");
        write_file(&path_a, &a);
        write_file(&path_b, &b);

        prop_assert_eq!(files_equal(&path_a, &path_b).unwrap(), a == b);
    }

    /// Reflexivity: every file equals itself.
    #[test]
    fn comparator_is_reflexive(
        contents in proptest::collection::vec(any::<u8>(), 0..(READ_BLOCK + 8)),
    ) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("f");
        write_file(&path, &contents);

        prop_assert!(files_equal(&path, &path).unwrap());
    }

    /// Symmetry: argument order never changes the verdict.
    #[test]
    fn comparator_is_symmetric(
        a in proptest::collection::vec(any::<u8>(), 0..512),
        b in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let dir = tempdir().unwrap();
        let path_a = dir.path().join("a");
        let path_b = dir.path().join("b");
        write_file(&path_a, &a);
        write_file(&path_b, &b);

        prop_assert_eq!(
            files_equal(&path_a, &path_b).unwrap(),
            files_equal(&path_b, &path_a).unwrap()
        );
    }

    /// Appending any byte to a copy makes the pair unequal.
    #[test]
    fn comparator_detects_added_tail(
        contents in proptest::collection::vec(any::<u8>(), 0..(READ_BLOCK + 8)),
        tail in any::<u8>(),
    ) {
        let dir = tempdir().unwrap();
        let path_a = dir.path().join("a");
        let path_b = dir.path().join("b");
        let mut longer = contents.clone();
        longer.push(tail);
        write_file(&path_a, &contents);
        write_file(&path_b, &longer);

        prop_assert!(!files_equal(&path_a, &path_b).unwrap());
    }
}
