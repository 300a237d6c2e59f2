//! Expanded-row tracking for tables with collapsible detail rows.

use std::collections::BTreeSet;

/// Set of expanded row indices.
///
/// `toggle` returns a new set instead of mutating in place, so a component
/// can swap the whole value into a signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedRows {
    indices: BTreeSet<usize>,
}

impl ExpandedRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `index` flipped between expanded and collapsed.
    #[must_use]
    pub fn toggle(&self, index: usize) -> Self {
        let mut indices = self.indices.clone();
        if !indices.remove(&index) {
            indices.insert(index);
        }
        Self { indices }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Expanded indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

impl FromIterator<usize> for ExpandedRows {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}
