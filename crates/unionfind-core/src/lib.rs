#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod disjoint_set;
pub mod error;
pub mod summary;

pub use disjoint_set::DisjointSet;
pub use error::DisjointSetError;
pub use summary::PartitionSummary;

/// Returns the current version of the unionfind-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
