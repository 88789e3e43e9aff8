//! Disjoint-set structure tracking component membership.
//!
//! Each batch worker populates a private structure sized to the full node
//! count, then hands it off to the merge stage. Merging consumes the donor
//! structure, so at any moment exactly one owner may mutate a given
//! structure.

/// Partition of `{0, .., capacity-1}` into equivalence classes.
///
/// Parent pointers with two-pass path compression and union by rank.
///
/// # Examples
/// ```
/// use renketsu_core::DisjointSetStruct;
///
/// let mut dss = DisjointSetStruct::new(4);
/// dss.union(0, 1);
/// dss.union(2, 3);
/// assert!(dss.same_set(0, 1));
/// assert!(!dss.same_set(1, 2));
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetStruct {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSetStruct {
    /// Creates a structure in which every node is its own representative.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            parent: (0..capacity).collect(),
            rank: vec![0; capacity],
        }
    }

    /// Resets every node to be its own representative again.
    pub fn reset(&mut self) {
        for (node, parent) in self.parent.iter_mut().enumerate() {
            *parent = node;
        }
        self.rank.fill(0);
    }

    /// Returns the number of nodes the structure covers.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.parent.len()
    }

    /// Returns the representative of `node`, compressing the walked path.
    pub fn find(&mut self, mut node: usize) -> usize {
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

    /// Returns the representative of `node` without mutating the structure.
    ///
    /// Slower than [`Self::find`] on deep trees but usable through a shared
    /// reference, which is how results are read after the final hand-off.
    #[must_use]
    pub fn set_id_of(&self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    /// Returns whether `left` and `right` are in the same class.
    pub fn same_set(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Joins the classes of `left` and `right`.
    pub fn union(&mut self, left: usize, right: usize) {
        let mut left_root = self.find(left);
        let mut right_root = self.find(right);
        if left_root == right_root {
            return;
        }
        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank {
            std::mem::swap(&mut left_root, &mut right_root);
        }
        self.parent[right_root] = left_root;
        if left_rank == right_rank {
            self.rank[left_root] = left_rank.saturating_add(1);
        }
    }

    /// Folds the unions recorded in `other` into this structure.
    ///
    /// Consumes `other` and returns the combined structure. Two nodes are in
    /// the same class afterwards iff they were connected by unions recorded
    /// in either input, or by a chain alternating between the two. The
    /// resulting partition does not depend on argument order.
    ///
    /// # Examples
    /// ```
    /// use renketsu_core::DisjointSetStruct;
    ///
    /// let mut a = DisjointSetStruct::new(3);
    /// a.union(0, 1);
    /// let mut b = DisjointSetStruct::new(3);
    /// b.union(1, 2);
    ///
    /// let mut merged = a.merge_from(b);
    /// assert!(merged.same_set(0, 2));
    /// ```
    #[must_use]
    pub fn merge_from(mut self, mut other: Self) -> Self {
        debug_assert_eq!(self.capacity(), other.capacity());
        for node in 0..self.parent.len() {
            let root = other.find(node);
            self.union(node, root);
        }
        self
    }
}
