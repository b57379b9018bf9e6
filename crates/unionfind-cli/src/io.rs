/// File and stdin reading with size enforcement and UTF-8 validation.
///
/// This module is the single entry point for all input I/O in the
/// `unionfind` binary. `unionfind-core` never touches the filesystem.
///
/// Key behaviours:
/// - Disk files: size checked via `std::fs::metadata` before any read.
/// - Stdin: buffered with a `Read::take` cap so allocation is bounded.
/// - UTF-8 validation with byte-offset reporting.
/// - All I/O and parse errors are converted to [`CliError`] variants with
///   exit code 2.
use std::io::ErrorKind;
use std::io::Read as _;
use std::io::Write as _;
use std::path::Path;

use crate::PathOrStdin;
use crate::edges::EdgeList;
use crate::error::CliError;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for a missing or unreadable file, input
/// larger than `max_size`, stdin failures, and invalid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }
}

/// Reads `source` and parses it as an edge list.
///
/// With `verbose` set, the input size and the element and pair counts are
/// reported on stderr.
///
/// # Errors
///
/// Everything [`read_input`] returns, plus [`CliError::ParseFailed`] for a
/// malformed record.
pub fn read_edge_list(
    source: &PathOrStdin,
    max_size: u64,
    verbose: bool,
) -> Result<EdgeList, CliError> {
    let content = read_input(source, max_size)?;
    let label = source_label(source);

    let list = EdgeList::parse(&content).map_err(|e| CliError::ParseFailed {
        source: label.clone(),
        line: e.line,
        detail: e.detail,
    })?;

    if verbose {
        let stderr = std::io::stderr();
        let mut err_out = stderr.lock();
        writeln!(
            err_out,
            "read {} bytes from {label}: {} elements, {} pairs",
            content.len(),
            list.labels.len(),
            list.pairs.len()
        )
        .map_err(|e| CliError::IoError {
            source: "stderr".to_owned(),
            detail: e.to_string(),
        })?;
    }

    Ok(list)
}

/// Returns the label used for `source` in messages.
pub fn source_label(source: &PathOrStdin) -> String {
    match source {
        PathOrStdin::Path(path) => path.display().to_string(),
        PathOrStdin::Stdin => "-".to_owned(),
    }
}

// ---------------------------------------------------------------------------
// Disk file reading
// ---------------------------------------------------------------------------

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    bytes_to_string(&bytes, &path.display().to_string())
}

/// Maps a `std::io::Error` arising from a disk-file operation to a [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Stdin reading
// ---------------------------------------------------------------------------

/// Reads the entire stdin stream, capped at `max_size` bytes.
///
/// If exactly `max_size` bytes arrive, one more byte is probed to tell
/// "at the limit" from "over the limit".
fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let stdin = std::io::stdin();
    let mut handle = stdin.lock();

    let mut buf: Vec<u8> = Vec::new();
    handle
        .by_ref()
        .take(max_size)
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 == max_size {
        let mut probe = [0u8; 1];
        let extra = handle
            .read(&mut probe)
            .map_err(|e| CliError::StdinReadError {
                detail: e.to_string(),
            })?;
        if extra > 0 {
            return Err(CliError::FileTooLarge {
                source: "-".to_owned(),
                limit: max_size,
                actual: None,
            });
        }
    }

    bytes_to_string(&buf, "-")
}

// ---------------------------------------------------------------------------
// UTF-8 conversion
// ---------------------------------------------------------------------------

fn bytes_to_string(bytes: &[u8], source_label: &str) -> Result<String, CliError> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_owned()),
        Err(e) => Err(CliError::InvalidUtf8 {
            source: source_label.to_owned(),
            byte_offset: e.valid_up_to(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use std::io::Write as _;

    use super::*;

    fn temp_file_with(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("create temp file");
        f.write_all(contents).expect("write temp file");
        f
    }

    #[test]
    fn read_valid_utf8_file() {
        let f = temp_file_with(b"a b\n");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        let result = read_input(&source, 1024).expect("should read file");
        assert_eq!(result, "a b\n");
    }

    #[test]
    fn read_file_exactly_at_limit_succeeds() {
        let f = temp_file_with(b"hello");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        let result = read_input(&source, 5).expect("should succeed at limit");
        assert_eq!(result, "hello");
    }

    #[test]
    fn read_file_over_limit_returns_error() {
        let f = temp_file_with(b"hello world");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        match read_input(&source, 5) {
            Err(CliError::FileTooLarge {
                limit: 5,
                actual: Some(11),
                ..
            }) => {}
            other => panic!("expected FileTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = PathOrStdin::Path(dir.path().join("absent.txt"));
        let err = read_input(&source, 1024).expect_err("missing file");
        assert!(matches!(err, CliError::FileNotFound { .. }), "got {err:?}");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn invalid_utf8_reports_offset() {
        let f = temp_file_with(b"ab\xffcd");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        match read_input(&source, 1024) {
            Err(CliError::InvalidUtf8 { byte_offset: 2, .. }) => {}
            other => panic!("expected InvalidUtf8 at offset 2, got {other:?}"),
        }
    }

    #[test]
    fn malformed_edge_list_is_parse_failed() {
        let f = temp_file_with(b"a b\nx y z\n");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        match read_edge_list(&source, 1024, false) {
            Err(CliError::ParseFailed { line: 2, .. }) => {}
            other => panic!("expected ParseFailed on line 2, got {other:?}"),
        }
    }

    #[test]
    fn edge_list_is_parsed() {
        let f = temp_file_with(b"a b\nb c\n");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        let list = read_edge_list(&source, 1024, false).expect("parses");
        assert_eq!(list.labels.len(), 3);
        assert_eq!(list.pairs.len(), 2);
    }
}
