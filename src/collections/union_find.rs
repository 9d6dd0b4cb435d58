//! Disjoint-set (Union-Find) connectivity.
//!
//! The [`DisjointSet`] trait is the capability the percolation grid depends
//! on: merge two sets, and ask for a set's representative. [`UnionFind`] is
//! the stock implementation.
//!
//! # Algorithm
//!
//! [`UnionFind`] is a weighted quick-union forest: `union` hangs the smaller
//! tree under the root of the larger one (**union by size**), and `find`
//! applies **path halving**, pointing every other node on the walk at its
//! grandparent. Together these give amortized O(α(n)) per operation, where α
//! is the inverse Ackermann function.
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good but Not Linear Set Union Algorithm"
//! - Tarjan & van Leeuwen (1984), "Worst-Case Analysis of Set Union Algorithms"

/// A partition of the elements `0..len()` into disjoint sets.
///
/// Implementations are free to restructure their internals during `find`
/// (hence `&mut self`), but the partition itself only changes through
/// [`union`](DisjointSet::union).
pub trait DisjointSet {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n-1}`.
    fn with_len(n: usize) -> Self
    where
        Self: Sized;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    fn find(&mut self, x: usize) -> usize;

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `true` if a merge happened, `false` if they already shared a set.
    ///
    /// # Panics
    /// Panics if `x >= len()` or `y >= len()`.
    fn union(&mut self, x: usize, y: usize) -> bool;

    /// Returns `true` if `x` and `y` are in the same set.
    fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}

/// Weighted quick-union forest with path halving.
///
/// # Examples
/// ```
/// use percolation::collections::{DisjointSet, UnionFind};
///
/// let mut uf = UnionFind::new(5);
/// assert_eq!(uf.len(), 5);
///
/// uf.union(0, 1);
/// uf.union(2, 3);
/// assert!(uf.connected(0, 1));
/// assert!(!uf.connected(0, 2));
///
/// uf.union(1, 3);
/// assert!(uf.connected(0, 2));
/// assert!(!uf.connected(0, 4));
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Creates a new Union-Find with `n` singleton sets.
    ///
    /// # Complexity
    /// O(n)
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }
}

impl DisjointSet for UnionFind {
    fn with_len(n: usize) -> Self {
        Self::new(n)
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    /// Iterative find with path halving.
    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        // Smaller tree goes under the larger root; ties keep root_x.
        let (big, small) = if self.size[root_x] < self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.len(), 5);
        assert!(!uf.connected(0, 4));
    }

    #[test]
    fn test_new_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
    }

    #[test]
    fn test_with_len_matches_new() {
        let mut uf = <UnionFind as DisjointSet>::with_len(7);
        assert_eq!(uf.len(), 7);
        assert_eq!(uf.find(6), 6);
    }

    #[test]
    fn test_find_initial() {
        let mut uf = UnionFind::new(5);
        for i in 0..5 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn test_union_same_set() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert!(!uf.union(1, 0));
        assert!(!uf.connected(0, 2));
    }

    #[test]
    fn test_smaller_tree_joins_larger() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        uf.union(0, 2);
        let big_root = uf.find(0);
        uf.union(3, 0);
        assert_eq!(uf.find(3), big_root);
    }

    #[test]
    fn test_long_chain_compresses() {
        let n = 100_000;
        let mut uf = UnionFind::new(n);
        for i in 0..n - 1 {
            uf.union(i + 1, i);
        }
        assert!(uf.connected(0, n - 1));
        assert!(uf.connected(n / 2, 0));
    }

    #[test]
    fn test_not_connected() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1);
        uf.union(2, 3);
        assert!(!uf.connected(0, 2));
        assert!(!uf.connected(1, 4));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn union_find_transitivity(
            n in 2_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            let mut uf = UnionFind::new(n);
            for &(x, y) in &ops {
                if x < n && y < n {
                    uf.union(x, y);
                }
            }

            for x in 0..n {
                for y in 0..n {
                    for z in 0..n {
                        if uf.connected(x, y) && uf.connected(y, z) {
                            prop_assert!(
                                uf.connected(x, z),
                                "transitivity violated: {x}~{y} and {y}~{z} but not {x}~{z}"
                            );
                        }
                    }
                }
            }
        }

        #[test]
        fn union_reports_merge_exactly_when_disconnected(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..30),
        ) {
            let mut uf = UnionFind::new(n);
            // Naive labelling as the reference partition.
            let mut label: Vec<usize> = (0..n).collect();
            for &(x, y) in &ops {
                if x < n && y < n {
                    let was_apart = label[x] != label[y];
                    prop_assert_eq!(uf.union(x, y), was_apart);
                    let (from, to) = (label[y], label[x]);
                    for l in label.iter_mut() {
                        if *l == from {
                            *l = to;
                        }
                    }
                }
            }
            for x in 0..n {
                for y in 0..n {
                    prop_assert_eq!(uf.connected(x, y), label[x] == label[y]);
                }
            }
        }
    }
}
