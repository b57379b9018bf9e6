//! Implementation of `unionfind components <file>`.
//!
//! Unions every pair in the edge list and prints the partition:
//! - element count
//! - component count
//! - size of the largest component
//! - the members of each component, ordered by first appearance
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//!
//! Exit codes: 0 = success, 2 = unreadable or malformed input.
use std::io::Write as _;
use std::time::Instant;

use unionfind_core::PartitionSummary;

use crate::OutputFormat;
use crate::PathOrStdin;
use crate::cmd::stdout_error;
use crate::error::CliError;
use crate::io::read_edge_list;

/// Runs the `components` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if the input cannot be read or
/// parsed.
pub fn run(
    file: &PathOrStdin,
    format: OutputFormat,
    max_file_size: u64,
    verbose: bool,
) -> Result<(), CliError> {
    let list = read_edge_list(file, max_file_size, verbose)?;

    let started = Instant::now();
    let mut ds = list.build()?;
    let summary = list.label_summary(ds.summary());

    if verbose {
        let stderr = std::io::stderr();
        let mut err_out = stderr.lock();
        if list.labels.is_empty() {
            writeln!(err_out, "warning: input contains no elements").map_err(|e| {
                CliError::IoError {
                    source: "stderr".to_owned(),
                    detail: e.to_string(),
                }
            })?;
        }
        writeln!(
            err_out,
            "grouped {} elements into {} components in {:.3}ms",
            summary.element_count,
            summary.component_count,
            started.elapsed().as_secs_f64() * 1000.0
        )
        .map_err(|e| CliError::IoError {
            source: "stderr".to_owned(),
            detail: e.to_string(),
        })?;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &summary),
        OutputFormat::Json => print_json(&mut out, &summary),
    }
    .map_err(|e| stdout_error(&e))
}

/// Writes the partition as aligned key/value lines plus one line per
/// component.
fn print_human<W: std::io::Write>(
    w: &mut W,
    summary: &PartitionSummary<String>,
) -> std::io::Result<()> {
    writeln!(w, "elements:    {}", summary.element_count)?;
    writeln!(w, "components:  {}", summary.component_count)?;
    writeln!(w, "largest:     {}", summary.largest_component)?;
    for (i, members) in summary.components.iter().enumerate() {
        writeln!(w, "  #{} ({}): {}", i + 1, members.len(), members.join(" "))?;
    }
    Ok(())
}

/// Writes the partition as a single pretty-printed JSON object.
fn print_json<W: std::io::Write>(
    w: &mut W,
    summary: &PartitionSummary<String>,
) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
