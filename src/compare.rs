//! Block-wise binary equality comparison of two files.
//!
//! Files are read in lockstep in fixed-size blocks (see [`READ_BLOCK`]) and
//! compared as raw bytes. No upfront size check is done: a length mismatch
//! shows up as a block pair with differing byte counts and ends the
//! comparison early. Comparison is exact over the bytes actually read, so
//! embedded NUL bytes are handled like any other byte.
//!
//! Short kernel reads never produce a false mismatch: each block is filled
//! by looping until the buffer is full or the stream is exhausted.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Block size used for lockstep reads.
pub const READ_BLOCK: usize = 4096;

/// Errors that can occur while comparing a single pair of files.
///
/// These are local to the pair: the matcher skips the pair and keeps going.
#[derive(thiserror::Error, Debug)]
pub enum CompareError {
    /// A file could not be opened for reading.
    #[error("Failed to open {path}: {source}")]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A read failed partway through the comparison.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path being read when the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Determine whether two files have byte-identical contents.
///
/// Two empty files are equal, and a file compared against itself is equal.
/// The result is symmetric in its arguments.
///
/// # Errors
///
/// [`CompareError`] if either file cannot be opened or read. The files are
/// closed on every exit path; handles never outlive the call.
pub fn files_equal(path_a: &Path, path_b: &Path) -> Result<bool, CompareError> {
    let mut file_a = open(path_a)?;
    let mut file_b = open(path_b)?;

    let mut buf_a = [0u8; READ_BLOCK];
    let mut buf_b = [0u8; READ_BLOCK];

    loop {
        let n_a = read_block(&mut file_a, &mut buf_a, path_a)?;
        let n_b = read_block(&mut file_b, &mut buf_b, path_b)?;

        // A count mismatch can only happen at end of stream, so it means
        // the files have different total lengths.
        if n_a != n_b {
            return Ok(false);
        }

        if n_a == 0 {
            return Ok(true);
        }

        if buf_a[..n_a] != buf_b[..n_b] {
            return Ok(false);
        }
    }
}

fn open(path: &Path) -> Result<File, CompareError> {
    File::open(path).map_err(|source| CompareError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Fill `buf` from `file`, looping past short reads, stopping only at EOF.
fn read_block(file: &mut File, buf: &mut [u8], path: &Path) -> Result<usize, CompareError> {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(CompareError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(path: &Path, contents: &[u8]) {
        File::create(path).unwrap().write_all(contents).unwrap();
    }

    #[test]
    fn test_identical_contents_are_equal() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        write_file(&a, b"hello world");
        write_file(&b, b"hello world");

        assert!(files_equal(&a, &b).unwrap());
    }

    #[test]
    fn test_file_equals_itself() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        write_file(&a, b"some bytes");

        assert!(files_equal(&a, &a).unwrap());
    }

    #[test]
    fn test_empty_files_are_equal() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        write_file(&a, b"");
        write_file(&b, b"");

        assert!(files_equal(&a, &b).unwrap());
    }

    #[test]
    fn test_final_byte_difference_detected() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        write_file(&a, b"same prefix A");
        write_file(&b, b"same prefix B");

        assert!(!files_equal(&a, &b).unwrap());
    }

    #[test]
    fn test_length_mismatch_detected_without_size_check() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        write_file(&a, b"shared");
        write_file(&b, b"shared plus tail");

        assert!(!files_equal(&a, &b).unwrap());
        assert!(!files_equal(&b, &a).unwrap());
    }

    #[test]
    fn test_embedded_nul_does_not_truncate_comparison() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        // Identical up to and including the NUL, differing after it.
        write_file(&a, b"abc\x00def");
        write_file(&b, b"abc\x00xyz");

        assert!(!files_equal(&a, &b).unwrap());
    }

    #[test]
    fn test_binary_content_spanning_multiple_blocks() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");

        let mut contents = vec![0u8; READ_BLOCK * 3 + 17];
        for (i, byte) in contents.iter_mut().enumerate() {
            *byte = (i % 251) as u8;
        }
        write_file(&a, &contents);
        write_file(&b, &contents);
        assert!(files_equal(&a, &b).unwrap());

        // Flip one byte in the last partial block
        let last = contents.len() - 1;
        contents[last] ^= 0xff;
        write_file(&b, &contents);
        assert!(!files_equal(&a, &b).unwrap());
    }

    #[test]
    fn test_difference_exactly_at_block_boundary() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");

        let base = vec![0x41u8; READ_BLOCK];
        let mut other = base.clone();
        other.push(0x42);
        let mut longer = base.clone();
        longer.push(0x43);

        write_file(&a, &other);
        write_file(&b, &longer);
        assert!(!files_equal(&a, &b).unwrap());
    }

    #[test]
    fn test_missing_file_is_an_open_error() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("exists");
        write_file(&a, b"x");
        let missing = dir.path().join("missing");

        let err = files_equal(&a, &missing).unwrap_err();
        assert!(matches!(err, CompareError::Open { path, .. } if path == missing));
    }

    #[test]
    fn test_symmetry() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        write_file(&a, b"one content");
        write_file(&b, b"other content");

        assert_eq!(
            files_equal(&a, &b).unwrap(),
            files_equal(&b, &a).unwrap()
        );
    }
}
