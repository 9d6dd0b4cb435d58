//! Monte Carlo estimation of the percolation threshold.
//!
//! Each trial opens uniformly random blocked sites of a fresh
//! [`Percolation`] grid until it percolates and records the open fraction at
//! that moment. [`PercolationStats`] runs the trials sequentially and
//! summarizes the samples with a mean, sample standard deviation, and a
//! normal-approximation confidence interval.

use rand::Rng;
use tracing::{debug, debug_span, info};

use crate::collections::{DisjointSet, UnionFind};
use crate::error::PercolationError;
use crate::grid::Percolation;
use crate::random::{create_rng, entropy_rng, shuffled_indices};
use crate::special::two_sided_critical_value;
use crate::stats;

/// z for a two-sided 95% interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// How a trial picks the next site to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Draw uniformly over all n² sites and redraw while the pick is open.
    #[default]
    Redraw,
    /// Walk a random permutation of the sites, so every draw lands on a
    /// blocked site. Still uniform over the remaining blocked sites.
    BlockedPool,
}

/// Parameters of a threshold experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Grid side length.
    pub n: usize,
    /// Number of independent trials.
    pub trials: usize,
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Site selection strategy.
    pub sampling: Sampling,
}

impl ExperimentConfig {
    pub fn new(n: usize, trials: usize) -> Self {
        Self {
            n,
            trials,
            seed: None,
            sampling: Sampling::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Checks that both the grid size and trial count are positive.
    pub fn validate(&self) -> Result<(), PercolationError> {
        if self.n == 0 || self.trials == 0 {
            return Err(PercolationError::InvalidArgument(format!(
                "n and trials must be > 0, got n={}, trials={}",
                self.n, self.trials
            )));
        }
        Ok(())
    }
}

/// Runs one trial on a fresh grid and returns the percolation threshold,
/// `open sites / n²` at the moment the grid first percolates.
///
/// # Errors
/// Returns [`PercolationError::InvalidArgument`] if `n == 0`.
pub fn run_trial<U, R>(n: usize, sampling: Sampling, rng: &mut R) -> Result<f64, PercolationError>
where
    U: DisjointSet,
    R: Rng,
{
    let mut grid: Percolation<U> = Percolation::new(n)?;
    let sites = n * n;

    match sampling {
        Sampling::Redraw => {
            while !grid.percolates() {
                let site = rng.random_range(0..sites);
                let (row, col) = (site / n + 1, site % n + 1);
                if !grid.is_open(row, col)? {
                    grid.open(row, col)?;
                }
            }
        }
        Sampling::BlockedPool => {
            for site in shuffled_indices(sites, rng) {
                if grid.percolates() {
                    break;
                }
                grid.open(site / n + 1, site % n + 1)?;
            }
        }
    }

    let open_sites = grid.number_of_open_sites();
    let threshold = open_sites as f64 / sites as f64;
    debug!(n, open_sites, threshold, "trial percolated");
    Ok(threshold)
}

/// Summary statistics over independent percolation trials.
///
/// # Examples
/// ```
/// use percolation::experiment::{ExperimentConfig, PercolationStats};
///
/// let config = ExperimentConfig::new(20, 50).with_seed(7);
/// let stats = PercolationStats::with_config(&config).unwrap();
/// assert!(stats.mean() > 0.0 && stats.mean() < 1.0);
/// assert!(stats.confidence_lo() <= stats.mean());
/// assert!(stats.mean() <= stats.confidence_hi());
/// ```
#[derive(Debug, Clone)]
pub struct PercolationStats {
    n: usize,
    thresholds: Vec<f64>,
    mean: f64,
    stddev: f64,
}

impl PercolationStats {
    /// Runs `trials` trials on an n-by-n grid with OS-seeded randomness and
    /// the redraw sampler.
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidArgument`] if `n == 0` or
    /// `trials == 0`.
    pub fn new(n: usize, trials: usize) -> Result<Self, PercolationError> {
        Self::with_config(&ExperimentConfig::new(n, trials))
    }

    /// Runs the experiment described by `config`.
    pub fn with_config(config: &ExperimentConfig) -> Result<Self, PercolationError> {
        config.validate()?;
        match config.seed {
            Some(seed) => Self::run(config, &mut create_rng(seed)),
            None => Self::run(config, &mut entropy_rng()),
        }
    }

    /// Runs the experiment with a caller-supplied RNG.
    pub fn run<R: Rng>(config: &ExperimentConfig, rng: &mut R) -> Result<Self, PercolationError> {
        config.validate()?;

        let mut thresholds = Vec::with_capacity(config.trials);
        for trial in 0..config.trials {
            let _span = debug_span!("trial", trial).entered();
            thresholds.push(run_trial::<UnionFind, _>(config.n, config.sampling, rng)?);
        }

        // Thresholds are finite fractions in (0, 1], so mean always exists;
        // stddev is undefined for a single trial.
        let mean = stats::mean(&thresholds).unwrap_or(f64::NAN);
        let stddev = stats::std_dev(&thresholds).unwrap_or(f64::NAN);
        info!(n = config.n, trials = config.trials, mean, stddev, "experiment complete");

        Ok(Self {
            n: config.n,
            thresholds,
            mean,
            stddev,
        })
    }

    /// Grid side length.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of trials run.
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Per-trial thresholds, in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of the percolation threshold.
    ///
    /// NaN when only one trial was run.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean - self.half_width(CONFIDENCE_95)
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean + self.half_width(CONFIDENCE_95)
    }

    /// `(lo, hi)` of the two-sided confidence interval at `level`.
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidArgument`] unless `0 < level < 1`.
    pub fn confidence_interval(&self, level: f64) -> Result<(f64, f64), PercolationError> {
        let z = two_sided_critical_value(level).ok_or_else(|| {
            PercolationError::InvalidArgument(format!(
                "confidence level must be in (0, 1), got {level}"
            ))
        })?;
        let half = self.half_width(z);
        Ok((self.mean - half, self.mean + half))
    }

    fn half_width(&self, z: f64) -> f64 {
        z * self.stddev / (self.trials() as f64).sqrt()
    }
}
