//! Workload generator and benchmark utilities for `unionfind-core`.
//!
//! This crate provides deterministic generation of union workloads for
//! benchmarking and invariant checking of [`unionfind_core::DisjointSet`].

pub mod correctness;
pub mod generator;

pub use generator::{SizeTier, WorkloadConfig, chain_pairs, generate_pairs};
