//! Pairwise edge generation.
//!
//! Every unordered pair of points becomes one [`Edge`] weighted by its squared
//! Euclidean distance. Edges are sorted by `(distance, source, target)`, a
//! total order, so every backend produces the same sequence and downstream
//! queries replay identically.
//!
//! With the `parallel` feature the distance pass runs on the rayon pool and
//! the sort uses `par_sort_unstable`. The union-find walk that consumes the
//! edges stays sequential.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{
    Point,
    distance::squared_euclidean_distance,
    error::{ConnectivityError, Result},
};

/// A weighted pair of point indices in canonical form (`source < target`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    distance: u128,
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates an edge, swapping the endpoints when `right < left`.
    ///
    /// # Examples
    /// ```
    /// use tether_core::Edge;
    ///
    /// let edge = Edge::new(9, 4, 1);
    /// assert_eq!((edge.source(), edge.target()), (1, 4));
    /// ```
    #[must_use]
    pub const fn new(distance: u128, left: usize, right: usize) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            distance,
            source,
            target,
        }
    }

    /// Returns the squared distance between the endpoints.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance(&self) -> u128 { self.distance }

    /// Returns the smaller endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// How the pairwise pass is executed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Backend {
    Sequential,
    #[cfg(feature = "parallel")]
    Parallel,
}

impl Default for Backend {
    fn default() -> Self {
        #[cfg(feature = "parallel")]
        {
            Self::Parallel
        }
        #[cfg(not(feature = "parallel"))]
        {
            Self::Sequential
        }
    }
}

/// Returns the number of unordered pairs among `points` points.
///
/// Saturates at `usize::MAX` when the pair count is unrepresentable.
///
/// # Examples
/// ```
/// use tether_core::total_edge_count;
///
/// assert_eq!(total_edge_count(0), 0);
/// assert_eq!(total_edge_count(1), 0);
/// assert_eq!(total_edge_count(20), 190);
/// ```
#[must_use]
pub const fn total_edge_count(points: usize) -> usize {
    match points.checked_mul(points.saturating_sub(1)) {
        Some(pairs) => pairs / 2,
        None => usize::MAX,
    }
}

/// Generates every pairwise edge among `points`, sorted ascending.
///
/// # Errors
/// - [`ConnectivityError::DimensionMismatch`] when a point's arity differs
///   from the first point's.
/// - [`ConnectivityError::Distance`] when a squared distance overflows.
///
/// # Examples
/// ```
/// use tether_core::{Point, generate_edges};
///
/// let points = [Point::from([0, 0]), Point::from([0, 3]), Point::from([0, 1])];
/// let edges = generate_edges(&points)?;
/// let order: Vec<_> = edges.iter().map(|e| (e.source(), e.target())).collect();
/// assert_eq!(order, vec![(0, 2), (1, 2), (0, 1)]);
/// # Ok::<(), tether_core::ConnectivityError>(())
/// ```
pub fn generate_edges(points: &[Point]) -> Result<Vec<Edge>> {
    generate(points, Backend::default())
}

#[instrument(name = "edges.generate", level = "debug", skip(points), fields(point_count = points.len()))]
pub(crate) fn generate(points: &[Point], backend: Backend) -> Result<Vec<Edge>> {
    validate_dimensions(points)?;

    let edges = match backend {
        Backend::Sequential => generate_sequential(points)?,
        #[cfg(feature = "parallel")]
        Backend::Parallel => generate_parallel(points)?,
    };

    debug!(edges = edges.len(), ?backend, "edges generated");
    #[cfg(feature = "metrics")]
    metrics::counter!("tether_edges_generated_total")
        .increment(u64::try_from(edges.len()).unwrap_or(u64::MAX));
    Ok(edges)
}

fn validate_dimensions(points: &[Point]) -> Result<()> {
    let Some(expected) = points.first().map(Point::dimensions) else {
        return Ok(());
    };
    match points
        .iter()
        .enumerate()
        .find(|(_, point)| point.dimensions() != expected)
    {
        Some((index, point)) => Err(ConnectivityError::DimensionMismatch {
            index,
            expected,
            actual: point.dimensions(),
        }),
        None => Ok(()),
    }
}

fn pair_edge(source: usize, left: &Point, target: usize, right: &Point) -> Result<Edge> {
    let distance = squared_euclidean_distance(left.coords(), right.coords()).map_err(|error| {
        ConnectivityError::Distance {
            left: source,
            right: target,
            error,
        }
    })?;
    Ok(Edge {
        distance,
        source,
        target,
    })
}

fn edges_from(source: usize, left: &Point, points: &[Point]) -> Result<Vec<Edge>> {
    points
        .iter()
        .enumerate()
        .skip(source + 1)
        .map(|(target, right)| pair_edge(source, left, target, right))
        .collect()
}

fn generate_sequential(points: &[Point]) -> Result<Vec<Edge>> {
    let mut edges = Vec::with_capacity(total_edge_count(points.len()));
    for (source, left) in points.iter().enumerate() {
        edges.extend(edges_from(source, left, points)?);
    }
    edges.sort_unstable();
    Ok(edges)
}

#[cfg(feature = "parallel")]
fn generate_parallel(points: &[Point]) -> Result<Vec<Edge>> {
    let mut edges = points
        .par_iter()
        .enumerate()
        .try_fold(Vec::new, |mut acc, (source, left)| {
            acc.extend(edges_from(source, left, points)?);
            Ok::<_, ConnectivityError>(acc)
        })
        .try_reduce(Vec::new, |mut left, right| {
            left.extend(right);
            Ok(left)
        })?;

    edges.par_sort_unstable();
    Ok(edges)
}
