//! Synthetic point sets for benchmarking.
//!
//! Coordinates are drawn uniformly from `[0, extent)` with a seeded RNG, so
//! every run sees identical inputs.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tether_core::Point;

/// Errors that may occur during synthetic point generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested point count was zero.
    #[error("point count must be greater than zero")]
    ZeroPoints,
    /// The requested dimension count was zero.
    #[error("dimension count must be greater than zero")]
    ZeroDimensions,
    /// The coordinate extent was not positive.
    #[error("coordinate extent must be positive (got {extent})")]
    InvalidExtent {
        /// Extent supplied by the caller.
        extent: i64,
    },
}

/// Configuration for synthetic point generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Arity of each point.
    pub dimensions: usize,
    /// Exclusive upper bound for every coordinate.
    pub extent: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates points eagerly from the given configuration.
///
/// # Errors
///
/// Returns [`SyntheticError`] for zero points, zero dimensions, or a
/// non-positive extent.
///
/// # Examples
///
/// ```
/// use tether_benches::source::{SyntheticConfig, synthetic_points};
///
/// let config = SyntheticConfig { point_count: 8, dimensions: 3, extent: 1_000, seed: 7 };
/// let points = synthetic_points(&config).expect("valid config");
/// assert_eq!(points.len(), 8);
/// assert!(points.iter().all(|point| point.dimensions() == 3));
/// ```
pub fn synthetic_points(config: &SyntheticConfig) -> Result<Vec<Point>, SyntheticError> {
    if config.point_count == 0 {
        return Err(SyntheticError::ZeroPoints);
    }
    if config.dimensions == 0 {
        return Err(SyntheticError::ZeroDimensions);
    }
    if config.extent <= 0 {
        return Err(SyntheticError::InvalidExtent {
            extent: config.extent,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    Ok((0..config.point_count)
        .map(|_| {
            (0..config.dimensions)
                .map(|_| rng.gen_range(0..config.extent))
                .collect()
        })
        .collect())
}
