//! Array-backed disjoint-set (union-find) structure.
//!
//! Elements are the dense ordinals `[0, n)` fixed at construction. The forest
//! is stored as two flat vectors: a parent pointer per element and a component
//! size that is only meaningful at roots.
//!
//! [`DisjointSet::find`] uses two-pass path compression: the first pass walks
//! to the root, the second rewrites every visited node to point straight at
//! it. [`DisjointSet::union`] attaches the smaller component under the larger
//! one. Together they give the inverse-Ackermann amortized bound.
//!
//! When two components of equal size are merged, the root of the **second**
//! argument is attached under the root of the first. Callers should not rely
//! on which equal-sized root survives.
//!
//! Construction is logged at `debug` and every effective merge at `trace`
//! through the `log` facade. Nothing is printed unless the embedding program
//! installs a `log` backend.

use crate::error::DisjointSetError;
use crate::summary::PartitionSummary;

/// A partition of `[0, n)` into disjoint, non-empty components.
///
/// The partition only ever coarsens: [`union`](Self::union) merges two
/// components and nothing splits them again. [`find`](Self::find) takes
/// `&mut self` because it flattens the forest along the query path.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates a structure of `n` singleton components.
    ///
    /// Each element `i` starts as its own root (`parent[i] == i`) with a
    /// component size of 1.
    pub fn new(n: usize) -> Self {
        log::debug!("creating disjoint set of {n} elements");
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Returns the number of elements. Fixed at construction.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the structure holds no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of distinct components currently present.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the representative (root) of the component containing `p`.
    ///
    /// Compresses the traversed path so later queries on the same elements
    /// reach the root in one step. Membership, sizes and the component count
    /// are unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::IndexOutOfRange`] if `p >= len()`.
    pub fn find(&mut self, p: usize) -> Result<usize, DisjointSetError> {
        self.check(p)?;
        Ok(self.root_of(p))
    }

    /// Returns `true` if `p` and `q` belong to the same component.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::IndexOutOfRange`] if either index is out of
    /// range. Both are checked before any path is compressed.
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool, DisjointSetError> {
        self.check(p)?;
        self.check(q)?;
        Ok(self.root_of(p) == self.root_of(q))
    }

    /// Returns the number of elements in the component containing `p`.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::IndexOutOfRange`] if `p >= len()`.
    pub fn component_size(&mut self, p: usize) -> Result<usize, DisjointSetError> {
        let root = self.find(p)?;
        Ok(self.size[root])
    }

    /// Returns `true` if `p` is currently the representative of its component.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::IndexOutOfRange`] if `p >= len()`.
    pub fn is_root(&self, p: usize) -> Result<bool, DisjointSetError> {
        self.check(p)?;
        Ok(self.parent[p] == p)
    }

    /// Merges the components containing `p` and `q`.
    ///
    /// The root of the smaller component becomes a child of the root of the
    /// larger one; on a tie the root of `q` goes under the root of `p`.
    /// Returns `true` if two components were merged and `false` if `p` and
    /// `q` were already connected (in which case nothing changes).
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::IndexOutOfRange`] if either index is out of
    /// range. Nothing is mutated in that case.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool, DisjointSetError> {
        self.check(p)?;
        self.check(q)?;

        let root_p = self.root_of(p);
        let root_q = self.root_of(q);
        if root_p == root_q {
            return Ok(false);
        }

        let (child, survivor) = if self.size[root_p] < self.size[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.parent[child] = survivor;
        self.size[survivor] += self.size[child];
        self.components -= 1;

        log::trace!(
            "merged root {child} into {survivor} (size {}, {} components left)",
            self.size[survivor],
            self.components
        );
        Ok(true)
    }

    /// Returns every component as a sorted list of its members.
    ///
    /// Components are ordered by their smallest member. This runs a find on
    /// every element, so the whole forest is flattened afterwards.
    pub fn components(&mut self) -> Vec<Vec<usize>> {
        let mut slot_of_root: Vec<Option<usize>> = vec![None; self.len()];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.components);

        for element in 0..self.len() {
            let root = self.root_of(element);
            if let Some(slot) = slot_of_root[root] {
                groups[slot].push(element);
            } else {
                slot_of_root[root] = Some(groups.len());
                let mut members = Vec::with_capacity(self.size[root]);
                members.push(element);
                groups.push(members);
            }
        }
        groups
    }

    /// Builds a serializable snapshot of the current partition.
    pub fn summary(&mut self) -> PartitionSummary {
        PartitionSummary::new(self.len(), self.components())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn check(&self, index: usize) -> Result<(), DisjointSetError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(DisjointSetError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    /// Two-pass find on an index already known to be in range.
    fn root_of(&mut self, p: usize) -> usize {
        let mut root = p;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = p;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    #[cfg(test)]
    fn parent_of(&self, p: usize) -> usize {
        self.parent[p]
    }
}

impl TryFrom<i64> for DisjointSet {
    type Error = DisjointSetError;

    /// Creates a structure from a signed size, rejecting negative values.
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        let len = usize::try_from(n).map_err(|_| DisjointSetError::InvalidSize { requested: n })?;
        Ok(Self::new(len))
    }
}
