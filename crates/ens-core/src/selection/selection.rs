//! Combine Selections

use std::ops::{BitAnd, BitOr};

/// Selection
///
/// Sorted, de-duplicated row indices identifying a set of atoms within a
/// [`Molecule`](crate::Molecule).
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    pub fn new(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Selection { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.indices.binary_search(&idx).is_ok()
    }

    /// Atoms in both selections.
    pub fn and(&self, other: &Selection) -> Selection {
        Selection {
            indices: self
                .indices
                .iter()
                .copied()
                .filter(|&idx| other.contains(idx))
                .collect(),
        }
    }

    /// Atoms in either selection.
    pub fn or(&self, other: &Selection) -> Selection {
        let mut indices = self.indices.clone();
        indices.extend_from_slice(&other.indices);
        Selection::new(indices)
    }

    /// Atoms in this selection but not in `other`.
    pub fn not(&self, other: &Selection) -> Selection {
        Selection {
            indices: self
                .indices
                .iter()
                .copied()
                .filter(|&idx| !other.contains(idx))
                .collect(),
        }
    }
}

impl BitAnd for &Selection {
    type Output = Selection;

    fn bitand(self, other: Self) -> Selection {
        self.and(other)
    }
}

impl BitOr for &Selection {
    type Output = Selection;

    fn bitor(self, other: Self) -> Selection {
        self.or(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_operations() {
        let a = Selection::new(vec![4, 1, 2, 2]);
        let b = Selection::new(vec![2, 3, 4]);

        assert_eq!(a.indices(), &[1, 2, 4]);
        assert_eq!((&a & &b).indices(), &[2, 4]);
        assert_eq!((&a | &b).indices(), &[1, 2, 3, 4]);
        assert_eq!(a.not(&b).indices(), &[1]);
        assert!(Selection::default().is_empty());
        assert!(b.contains(3));
    }
}
