//! Integer squared-Euclidean distance.
//!
//! Distances are only ever compared, so the square root is skipped and the
//! sum is accumulated in `u128` to keep the metric exact.

use thiserror::Error;

use crate::error::define_error_codes;
use std::fmt;

/// An error produced while computing a squared distance.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DistanceError {
    /// Compared vectors had different dimensions.
    #[error("dimension mismatch: left={left}, right={right}")]
    DimensionMismatch {
        /// Dimensionality of the left-hand vector.
        left: usize,
        /// Dimensionality of the right-hand vector.
        right: usize,
    },
    /// The accumulated squared distance does not fit in `u128`.
    #[error("squared distance overflowed")]
    Overflow,
}

define_error_codes! {
    /// Stable codes describing [`DistanceError`] variants.
    enum DistanceErrorCode for DistanceError {
        /// Compared vectors had different dimensions.
        DimensionMismatch => DimensionMismatch { .. } => "DISTANCE_DIMENSION_MISMATCH",
        /// The accumulated squared distance overflowed.
        Overflow => Overflow => "DISTANCE_OVERFLOW",
    }
}

/// Computes the squared Euclidean distance between two integer vectors.
///
/// # Examples
///
/// ```
/// use tether_core::{DistanceError, squared_euclidean_distance};
///
/// fn main() -> Result<(), DistanceError> {
///     let distance = squared_euclidean_distance(&[1, 2, 3], &[4, 6, 3])?;
///     assert_eq!(distance, 25);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`DistanceError::DimensionMismatch`] when input lengths differ.
/// - [`DistanceError::Overflow`] when the sum exceeds `u128::MAX`.
pub fn squared_euclidean_distance(left: &[i64], right: &[i64]) -> Result<u128, DistanceError> {
    if left.len() != right.len() {
        return Err(DistanceError::DimensionMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    left.iter()
        .zip(right)
        .try_fold(0_u128, |sum, (&l, &r)| {
            let delta = (i128::from(l) - i128::from(r)).unsigned_abs();
            delta.checked_mul(delta).and_then(|sq| sum.checked_add(sq))
        })
        .ok_or(DistanceError::Overflow)
}
