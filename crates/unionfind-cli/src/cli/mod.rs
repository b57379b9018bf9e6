//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default).
    Human,
    /// A single pretty-printed JSON object.
    Json,
}

/// All top-level subcommands exposed by the `unionfind` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Union every pair in an edge list and print the resulting components.
    Components {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Report whether two elements end up in the same component.
    ///
    /// Exits with status 1 when they do not.
    Connected {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// First element label.
        #[arg(value_name = "A")]
        a: String,
        /// Second element label.
        #[arg(value_name = "B")]
        b: String,
    },

    /// Print the size of the component containing an element.
    Size {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Element label.
        #[arg(value_name = "LABEL")]
        label: String,
    },

    /// Print the unionfind-core library version.
    Version,
}

/// Root CLI struct for the `unionfind` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "unionfind",
    version,
    about = "Group labelled elements into connected components",
    long_about = "Reads an edge list (one `a b` pair per line, `#` comments allowed),\n\
                  merges the paired elements with a disjoint-set structure, and\n\
                  answers component and connectivity queries."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report input size, element and pair counts, and timing on stderr
    /// (incompatible with `--quiet`).
    ///
    /// The per-merge `log` records emitted by `unionfind-core` are not shown
    /// here; they need a `log` backend installed by an embedding program.
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input size in bytes.
    ///
    /// Can also be set via the `UNIONFIND_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "UNIONFIND_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,
}
