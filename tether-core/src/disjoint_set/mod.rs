//! Union-find (disjoint set union) with per-root component sizes.
//!
//! Elements are dense indices `0..len`. The structure keeps three parallel
//! vectors: `parent` links each element towards its root, `rank` bounds the
//! height of a root's tree, and `size` counts the members of a root's
//! component. `rank` and `size` are only meaningful at roots.
//!
//! `find` compresses paths iteratively: one pass locates the root, a second
//! pass rewrites every visited node to point at it. `union` attaches the
//! lower-ranked root beneath the higher-ranked one; on equal ranks the root of
//! the first argument absorbs the second and its rank grows by one. Which node
//! ends up as representative therefore depends on argument order, but the
//! resulting partition and its sizes never do.

use crate::error::{ConnectivityError, Result};

/// A partition of `0..len` into disjoint components.
///
/// # Examples
/// ```
/// use tether_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(0, 1)?);
/// assert!(set.union(2, 3)?);
/// assert!(!set.union(1, 0)?);
/// assert_eq!(set.component_count(), 2);
/// assert_eq!(set.component_size(1)?, 2);
/// # Ok::<(), tether_core::ConnectivityError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton components, each its own root with rank 0
    /// and size 1.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            size: vec![1; len],
            components: len,
        }
    }

    /// Creates a disjoint set from a signed length.
    ///
    /// # Errors
    /// Returns [`ConnectivityError::InvalidSize`] when `len` is negative or
    /// does not fit in `usize`.
    ///
    /// # Examples
    /// ```
    /// use tether_core::{ConnectivityError, DisjointSet};
    ///
    /// assert_eq!(DisjointSet::try_new(0)?.component_count(), 0);
    /// assert!(matches!(
    ///     DisjointSet::try_new(-1),
    ///     Err(ConnectivityError::InvalidSize { requested: -1 })
    /// ));
    /// # Ok::<(), ConnectivityError>(())
    /// ```
    pub fn try_new(len: i64) -> Result<Self> {
        let len = usize::try_from(len).map_err(|_| ConnectivityError::InvalidSize {
            requested: len,
        })?;
        Ok(Self::new(len))
    }

    /// Returns the number of elements tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the canonical root of `index`'s component, compressing the
    /// path walked along the way.
    ///
    /// # Errors
    /// Returns [`ConnectivityError::IndexOutOfRange`] when `index >= len`.
    pub fn find(&mut self, index: usize) -> Result<usize> {
        self.check_index(index)?;
        Ok(self.find_root(index))
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `false` when both already share a component. Both indices are
    /// validated before anything is mutated.
    ///
    /// # Errors
    /// Returns [`ConnectivityError::IndexOutOfRange`] for invalid indices.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        self.check_index(left)?;
        self.check_index(right)?;

        let left_root = self.find_root(left);
        let right_root = self.find_root(right);
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (parent, child) = if left_rank < right_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };

        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        if left_rank == right_rank {
            self.rank[parent] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// Both indices are validated before either path is compressed.
    ///
    /// # Errors
    /// Returns [`ConnectivityError::IndexOutOfRange`] for invalid indices.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool> {
        self.check_index(left)?;
        self.check_index(right)?;
        Ok(self.find_root(left) == self.find_root(right))
    }

    /// Returns the number of elements in `index`'s component.
    ///
    /// # Errors
    /// Returns [`ConnectivityError::IndexOutOfRange`] when `index >= len`.
    pub fn component_size(&mut self, index: usize) -> Result<usize> {
        let root = self.find(index)?;
        Ok(self.size[root])
    }

    /// Returns the number of distinct components.
    ///
    /// The count is maintained on every successful union and always equals
    /// the number of elements yielded by [`DisjointSet::roots`].
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns `true` when `index` is the representative of its component.
    ///
    /// # Errors
    /// Returns [`ConnectivityError::IndexOutOfRange`] when `index >= len`.
    pub fn is_root(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.parent[index] == index)
    }

    /// Iterates over the current roots in ascending index order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(index, &parent)| (index == parent).then_some(index))
    }

    /// Returns the size of every component, one entry per root, in ascending
    /// root order.
    #[must_use]
    pub fn all_component_sizes(&self) -> Vec<usize> {
        self.roots().map(|root| self.size[root]).collect()
    }

    /// Returns the components as sorted index sets, ordered by their smallest
    /// member.
    ///
    /// The result is independent of which element represents each component.
    #[must_use]
    pub fn partition(&mut self) -> Vec<Vec<usize>> {
        let mut slot_of_root = vec![usize::MAX; self.len()];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.components);
        for index in 0..self.len() {
            let root = self.find_root(index);
            let slot = &mut slot_of_root[root];
            if *slot == usize::MAX {
                *slot = groups.len();
                groups.push(Vec::with_capacity(self.size[root]));
            }
            groups[*slot].push(index);
        }
        groups
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(ConnectivityError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }
}

#[cfg(test)]
mod property;
