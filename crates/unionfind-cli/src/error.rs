/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `unionfind` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2** — input failure: the input could not be read or is not a
///   well-formed edge list. Nothing has been unioned yet.
/// - Exit code **1** — logical failure: the input was processed but the
///   answer is negative (elements not connected) or a query named a label
///   that does not occur in the input.
use std::fmt;
use std::path::PathBuf;

use unionfind_core::DisjointSetError;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `unionfind` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (disk files only).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source or sink.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a well-formed edge list.
    ParseFailed {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// 1-based line number of the offending record.
        line: usize,
        /// What was wrong with the record.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// A query named a label that never appears in the input.
    UnknownLabel {
        /// The label that was not found.
        label: String,
    },

    /// The two queried elements belong to different components.
    ///
    /// The answer has already been printed; this variant exists so `main`
    /// can exit with code 1.
    NotConnected {
        /// First queried label.
        a: String,
        /// Second queried label.
        b: String,
    },

    /// The disjoint-set structure rejected an operation.
    ///
    /// Indices come from the label interner, so this indicates a bug rather
    /// than bad input.
    Internal {
        /// The underlying error message.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. } => 2,

            Self::UnknownLabel { .. } | Self::NotConnected { .. } | Self::Internal { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ParseFailed {
                source,
                line,
                detail,
            } => {
                format!("error: {source}:{line}: {detail}")
            }
            Self::UnknownLabel { label } => {
                format!("error: unknown element {label:?}")
            }
            Self::NotConnected { a, b } => {
                format!("{a} and {b} are in different components")
            }
            Self::Internal { detail } => {
                format!("error: internal error: {detail}")
            }
        }
    }
}

impl From<DisjointSetError> for CliError {
    fn from(e: DisjointSetError) -> Self {
        Self::Internal {
            detail: e.to_string(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
