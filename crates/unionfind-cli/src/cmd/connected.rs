//! Implementation of `unionfind connected <file> <a> <b>`.
//!
//! Prints `connected` or `not connected`. In `--format json` mode a single
//! object `{"a": .., "b": .., "connected": ..}` is emitted instead.
//!
//! Exit codes:
//! - 0 = the two elements share a component
//! - 1 = they do not, or a label does not occur in the input
//! - 2 = unreadable or malformed input
use std::io::Write as _;

use crate::OutputFormat;
use crate::PathOrStdin;
use crate::cmd::{resolve, stdout_error};
use crate::error::CliError;
use crate::io::read_edge_list;

/// Runs the `connected` command.
///
/// # Errors
///
/// - [`CliError::UnknownLabel`] if `a` or `b` never appears in the input.
/// - [`CliError::NotConnected`] after printing a negative answer.
/// - Input failures from [`read_edge_list`].
pub fn run(
    file: &PathOrStdin,
    a: &str,
    b: &str,
    format: OutputFormat,
    max_file_size: u64,
    verbose: bool,
) -> Result<(), CliError> {
    let list = read_edge_list(file, max_file_size, verbose)?;
    let p = resolve(&list, a)?;
    let q = resolve(&list, b)?;

    let mut ds = list.build()?;
    let connected = ds.connected(p, q)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_answer(&mut out, a, b, connected, format).map_err(|e| stdout_error(&e))?;

    if connected {
        Ok(())
    } else {
        Err(CliError::NotConnected {
            a: a.to_owned(),
            b: b.to_owned(),
        })
    }
}

fn write_answer<W: std::io::Write>(
    w: &mut W,
    a: &str,
    b: &str,
    connected: bool,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => {
            if connected {
                writeln!(w, "connected")
            } else {
                writeln!(w, "not connected")
            }
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "a": a,
                "b": b,
                "connected": connected,
            });
            let json = serde_json::to_string_pretty(&value).map_err(std::io::Error::other)?;
            writeln!(w, "{json}")
        }
    }
}
