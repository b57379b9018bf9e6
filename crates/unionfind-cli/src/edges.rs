//! Edge-list input format and the label-to-index mapping.
//!
//! `unionfind-core` works on dense indices only. This module turns a text
//! edge list into those indices:
//!
//! ```text
//! # comment
//! a b      <- union a and b
//! c        <- declare c as a singleton
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Labels are interned
//! in first-appearance order, so the first label seen gets index 0.
use std::collections::HashMap;

use unionfind_core::{DisjointSet, DisjointSetError, PartitionSummary};

// ---------------------------------------------------------------------------
// LabelIndex
// ---------------------------------------------------------------------------

/// Bidirectional mapping between string labels and dense indices.
#[derive(Debug, Default, Clone)]
pub struct LabelIndex {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelIndex {
    /// Returns the index for `label`, assigning the next free one if unseen.
    pub fn intern(&mut self, label: &str) -> usize {
        if let Some(&i) = self.index.get(label) {
            return i;
        }
        let i = self.labels.len();
        self.labels.push(label.to_owned());
        self.index.insert(label.to_owned(), i);
        i
    }

    /// Returns the index of `label`, if it has been interned.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Returns the label at `index`, if any.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if no label has been interned.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// ---------------------------------------------------------------------------
// EdgeList
// ---------------------------------------------------------------------------

/// A malformed record in an edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeListError {
    /// 1-based line number.
    pub line: usize,
    /// Description of the problem.
    pub detail: String,
}

/// A parsed edge list: every label seen plus the union pairs in input order.
#[derive(Debug, Default, Clone)]
pub struct EdgeList {
    /// Label mapping for every element mentioned in the input.
    pub labels: LabelIndex,
    /// Union pairs, as indices into `labels`.
    pub pairs: Vec<(usize, usize)>,
}

impl EdgeList {
    /// Parses the edge-list text format.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeListError`] for the first line holding more than two
    /// whitespace-separated fields.
    pub fn parse(content: &str) -> Result<Self, EdgeListError> {
        let mut list = Self::default();

        for (n, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (Some(first), second, None) = (fields.next(), fields.next(), fields.next()) else {
                return Err(EdgeListError {
                    line: n + 1,
                    detail: format!(
                        "expected at most 2 fields, found {}",
                        line.split_whitespace().count()
                    ),
                });
            };

            let p = list.labels.intern(first);
            if let Some(second) = second {
                let q = list.labels.intern(second);
                list.pairs.push((p, q));
            }
        }
        Ok(list)
    }

    /// Builds the disjoint set over every label and applies all unions.
    ///
    /// # Errors
    ///
    /// Propagates [`DisjointSetError`] from the structure; with indices taken
    /// from `labels` this does not happen in practice.
    pub fn build(&self) -> Result<DisjointSet, DisjointSetError> {
        let mut ds = DisjointSet::new(self.labels.len());
        for &(p, q) in &self.pairs {
            ds.union(p, q)?;
        }
        Ok(ds)
    }

    /// Translates an index summary into one keyed by label.
    pub fn label_summary(&self, summary: PartitionSummary) -> PartitionSummary<String> {
        summary.map_members(|i| self.labels.label(i).unwrap_or_default().to_owned())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn interning_is_first_appearance_order() {
        let mut labels = LabelIndex::default();
        assert_eq!(labels.intern("x"), 0);
        assert_eq!(labels.intern("y"), 1);
        assert_eq!(labels.intern("x"), 0);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get("y"), Some(1));
        assert_eq!(labels.get("z"), None);
        assert_eq!(labels.label(1), Some("y"));
        assert_eq!(labels.label(2), None);
    }

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        let list = EdgeList::parse("# header\n\n  a b  \n# a c\nc\n").expect("valid");
        assert_eq!(list.labels.len(), 3);
        assert_eq!(list.pairs, vec![(0, 1)]);
        assert_eq!(list.labels.get("c"), Some(2));
    }

    #[test]
    fn parse_rejects_three_fields_with_line_number() {
        let err = EdgeList::parse("a b\nc d e\n").expect_err("three fields");
        assert_eq!(err.line, 2);
        assert!(err.detail.contains('3'), "detail: {}", err.detail);
    }

    #[test]
    fn empty_input_is_empty_list() {
        let list = EdgeList::parse("").expect("valid");
        assert!(list.labels.is_empty());
        assert!(list.pairs.is_empty());
        let ds = list.build().expect("builds");
        assert_eq!(ds.component_count(), 0);
    }

    #[test]
    fn build_and_label_summary() {
        let list = EdgeList::parse("a b\nc\nb d\n").expect("valid");
        let mut ds = list.build().expect("builds");
        assert_eq!(ds.component_count(), 2);

        let summary = list.label_summary(ds.summary());
        assert_eq!(summary.element_count, 4);
        assert_eq!(summary.components, vec![vec!["a", "b", "d"], vec!["c"]]);
    }
}
