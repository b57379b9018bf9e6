//! Post-operation invariant checkers for correctness validation.

use std::collections::BTreeSet;

use unionfind_core::DisjointSet;

/// Verifies the structural invariants of a partition:
/// - every element reaches a root that reports itself as a root
/// - the number of distinct roots equals `component_count()`
/// - component sizes over distinct roots sum to `len()`
/// - `find` returns the same root when asked twice
pub fn check_partition_invariants(ds: &mut DisjointSet) -> Result<(), String> {
    let mut roots = BTreeSet::new();
    for p in 0..ds.len() {
        let root = ds.find(p).map_err(|e| e.to_string())?;
        if !ds.is_root(root).map_err(|e| e.to_string())? {
            return Err(format!("find({p}) returned {root}, which is not a root"));
        }
        let again = ds.find(p).map_err(|e| e.to_string())?;
        if again != root {
            return Err(format!("find({p}) changed from {root} to {again}"));
        }
        roots.insert(root);
    }

    if roots.len() != ds.component_count() {
        return Err(format!(
            "root count mismatch: distinct roots={}, component_count={}",
            roots.len(),
            ds.component_count()
        ));
    }

    let mut total = 0;
    for &root in &roots {
        total += ds.component_size(root).map_err(|e| e.to_string())?;
    }
    if total != ds.len() {
        return Err(format!(
            "size mismatch: component sizes sum to {total}, len={}",
            ds.len()
        ));
    }
    Ok(())
}

/// Verifies that applying `pairs` left every pair connected.
pub fn check_pairs_connected(ds: &mut DisjointSet, pairs: &[(usize, usize)]) -> Result<(), String> {
    for &(p, q) in pairs {
        if !ds.connected(p, q).map_err(|e| e.to_string())? {
            return Err(format!("{p} and {q} were unioned but are not connected"));
        }
    }
    Ok(())
}
