//! The n-by-n percolation grid.
//!
//! Sites are addressed by 1-indexed `(row, col)` and stored row-major at
//! linear index `(row - 1) * n + (col - 1)`. The connectivity structure holds
//! two extra virtual elements, `TOP = n²` and `BOTTOM = n² + 1`; every open
//! site in row 1 is joined to `TOP` and every open site in row n to `BOTTOM`.
//! "Is the grid percolating?" then reduces to one representative comparison.

use tracing::trace;

use crate::collections::{DisjointSet, UnionFind};
use crate::error::PercolationError;

/// An n-by-n grid of open/blocked sites with top-to-bottom connectivity.
///
/// Generic over the [`DisjointSet`] used for connectivity; the default is
/// [`UnionFind`].
///
/// # Examples
/// ```
/// use percolation::grid::Percolation;
///
/// let mut grid: Percolation = Percolation::new(3).unwrap();
/// grid.open(1, 2).unwrap();
/// grid.open(2, 2).unwrap();
/// assert!(!grid.percolates());
/// grid.open(3, 2).unwrap();
/// assert!(grid.percolates());
/// assert!(grid.is_full(3, 2).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Percolation<U = UnionFind> {
    n: usize,
    open_flags: Vec<bool>,
    open_count: usize,
    uf: U,
    top: usize,
    bottom: usize,
}

impl<U: DisjointSet> Percolation<U> {
    /// Creates an n-by-n grid with every site blocked.
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidArgument`] if `n == 0` or `n²`
    /// overflows `usize`.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(format!(
                "grid size n must be > 0, got {n}"
            )));
        }
        let sites = n
            .checked_mul(n)
            .filter(|sites| sites.checked_add(2).is_some())
            .ok_or_else(|| {
                PercolationError::InvalidArgument(format!("grid size n={n} is too large"))
            })?;

        Ok(Self {
            n,
            open_flags: vec![false; sites],
            open_count: 0,
            uf: U::with_len(sites + 2),
            top: sites,
            bottom: sites + 1,
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Maps `(row, col)` to its linear site id, validating the range.
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidArgument`] unless both coordinates
    /// are in `[1, n]`.
    pub fn site_index(&self, row: usize, col: usize) -> Result<usize, PercolationError> {
        if row < 1 || row > self.n || col < 1 || col > self.n {
            return Err(PercolationError::InvalidArgument(format!(
                "site ({row}, {col}) is outside [1, {n}] x [1, {n}]",
                n = self.n
            )));
        }
        Ok((row - 1) * self.n + (col - 1))
    }

    /// Opens site `(row, col)` if it is not open already.
    ///
    /// Joins the site to `TOP` (row 1), `BOTTOM` (row n), and to each open
    /// orthogonal neighbor. Opening an open site changes nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
        let index = self.site_index(row, col)?;
        if self.open_flags[index] {
            return Ok(());
        }

        self.open_flags[index] = true;
        self.open_count += 1;
        trace!(row, col, open_sites = self.open_count, "opened site");

        if row == 1 {
            self.uf.union(index, self.top);
        }
        if row == self.n {
            self.uf.union(index, self.bottom);
        }

        let n = self.n;
        if row > 1 {
            self.union_if_open(index, index - n);
        }
        if row < n {
            self.union_if_open(index, index + n);
        }
        if col > 1 {
            self.union_if_open(index, index - 1);
        }
        if col < n {
            self.union_if_open(index, index + 1);
        }
        Ok(())
    }

    fn union_if_open(&mut self, index: usize, neighbor: usize) {
        if self.open_flags[neighbor] {
            self.uf.union(index, neighbor);
        }
    }

    /// Is site `(row, col)` open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        let index = self.site_index(row, col)?;
        Ok(self.open_flags[index])
    }

    /// Is site `(row, col)` full, i.e. open and in the same set as `TOP`?
    ///
    /// Bottom-row sites all share `BOTTOM`, so after the grid percolates an
    /// open bottom-row site reports full even without its own path to the
    /// top row.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, PercolationError> {
        let index = self.site_index(row, col)?;
        Ok(self.open_flags[index] && self.uf.connected(index, self.top))
    }

    /// Number of open sites.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Does an open path connect the top row to the bottom row?
    pub fn percolates(&mut self) -> bool {
        self.uf.connected(self.top, self.bottom)
    }
}
