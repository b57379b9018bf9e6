/// Serializable snapshot of a partition.
///
/// [`PartitionSummary`] is produced by [`DisjointSet::summary`](crate::DisjointSet::summary)
/// with raw element indices. Callers that keep their own identifier mapping
/// can translate members with [`PartitionSummary::map_members`] before
/// serializing.
use serde::Serialize;

/// Counts and member lists for every component of a partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionSummary<T = usize> {
    /// Total number of elements in the partition.
    pub element_count: usize,
    /// Number of components.
    pub component_count: usize,
    /// Size of the largest component (0 for an empty partition).
    pub largest_component: usize,
    /// Members of each component, ordered by smallest member.
    pub components: Vec<Vec<T>>,
}

impl<T> PartitionSummary<T> {
    /// Builds a summary from a list of components.
    pub fn new(element_count: usize, components: Vec<Vec<T>>) -> Self {
        let largest_component = components.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            element_count,
            component_count: components.len(),
            largest_component,
            components,
        }
    }

    /// Translates every member with `f`, keeping component order and counts.
    pub fn map_members<U, F>(self, mut f: F) -> PartitionSummary<U>
    where
        F: FnMut(T) -> U,
    {
        PartitionSummary {
            element_count: self.element_count,
            component_count: self.component_count,
            largest_component: self.largest_component,
            components: self
                .components
                .into_iter()
                .map(|members| members.into_iter().map(&mut f).collect())
                .collect(),
        }
    }
}
