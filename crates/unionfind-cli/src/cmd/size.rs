//! Implementation of `unionfind size <file> <label>`.
//!
//! Prints the number of elements in the component containing `label`.
//!
//! Exit codes: 0 = success, 1 = unknown label, 2 = unreadable or malformed
//! input.
use std::io::Write as _;

use crate::OutputFormat;
use crate::PathOrStdin;
use crate::cmd::{resolve, stdout_error};
use crate::error::CliError;
use crate::io::read_edge_list;

/// Runs the `size` command.
///
/// # Errors
///
/// - [`CliError::UnknownLabel`] if `label` never appears in the input.
/// - Input failures from [`read_edge_list`].
pub fn run(
    file: &PathOrStdin,
    label: &str,
    format: OutputFormat,
    max_file_size: u64,
    verbose: bool,
) -> Result<(), CliError> {
    let list = read_edge_list(file, max_file_size, verbose)?;
    let p = resolve(&list, label)?;

    let mut ds = list.build()?;
    let size = ds.component_size(p)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_answer(&mut out, label, size, format).map_err(|e| stdout_error(&e))
}

fn write_answer<W: std::io::Write>(
    w: &mut W,
    label: &str,
    size: usize,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => writeln!(w, "{size}"),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "label": label,
                "component_size": size,
            });
            let json = serde_json::to_string_pretty(&value).map_err(std::io::Error::other)?;
            writeln!(w, "{json}")
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn human_answer_is_bare_number() {
        let mut buf = Vec::new();
        write_answer(&mut buf, "a", 7, OutputFormat::Human).expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "7\n");
    }

    #[test]
    fn json_answer_names_label_and_size() {
        let mut buf = Vec::new();
        write_answer(&mut buf, "solo", 1, OutputFormat::Json).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid JSON");
        assert_eq!(value["label"], "solo");
        assert_eq!(value["component_size"], 1);
    }
}
