/// Command module for the `unionfind` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments and returns `Ok(())` on success or
/// a [`crate::error::CliError`] on failure.
pub mod components;
pub mod connected;
pub mod size;

use crate::error::CliError;

/// Maps a failed write to stdout into a [`CliError`].
pub(crate) fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}

/// Resolves a queried label to its element index.
pub(crate) fn resolve(list: &crate::edges::EdgeList, label: &str) -> Result<usize, CliError> {
    list.labels.get(label).ok_or_else(|| CliError::UnknownLabel {
        label: label.to_owned(),
    })
}
