//! # percolation
//!
//! Monte Carlo estimation of the site percolation threshold on an n-by-n
//! grid.
//!
//! ## Modules
//!
//! - [`collections`] — Disjoint-set connectivity (`DisjointSet`, `UnionFind`)
//! - [`grid`] — The open/blocked grid with virtual top and bottom nodes
//! - [`experiment`] — Repeated randomized trials and their summary statistics
//! - [`stats`] — Numerically stable mean and variance
//! - [`special`] — Normal quantiles for confidence intervals
//! - [`random`] — Seeded RNG construction and shuffling
//!
//! ## Example
//!
//! ```
//! use percolation::experiment::{ExperimentConfig, PercolationStats};
//!
//! let stats = PercolationStats::with_config(&ExperimentConfig::new(10, 30).with_seed(1)).unwrap();
//! println!("mean = {}, stddev = {}", stats.mean(), stats.stddev());
//! ```

pub mod collections;
pub mod error;
pub mod experiment;
pub mod grid;
pub mod random;
pub mod special;
pub mod stats;

pub use error::PercolationError;
pub use experiment::{ExperimentConfig, PercolationStats, Sampling};
pub use grid::Percolation;
