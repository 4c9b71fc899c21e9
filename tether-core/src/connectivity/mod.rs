//! Connectivity queries over distance-ordered edges.
//!
//! Both queries generate the full sorted edge sequence and replay it into a
//! fresh [`DisjointSet`]. The bounded query applies a prefix of the sequence
//! and reports component sizes. The full-connectivity query walks until the
//! first union that leaves a single component and returns that edge; it never
//! examines the edges after it.

use tracing::{debug, info, instrument};

use crate::{
    DisjointSet, Engine, Point,
    edges::{self, Backend, Edge},
    error::{ConnectivityError, Result},
};

/// Component sizes in descending order.
///
/// Only the multiset matters; which points form which component is not
/// retained.
///
/// # Examples
/// ```
/// use tether_core::ComponentSizes;
///
/// let sizes = ComponentSizes::from_sizes(vec![1, 5, 2, 4]);
/// assert_eq!(sizes.as_slice(), &[5, 4, 2, 1]);
/// assert_eq!(sizes.largest(3), &[5, 4, 2]);
/// assert_eq!(sizes.product_of_largest(3), Some(40));
/// assert_eq!(sizes.total(), 12);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ComponentSizes {
    sizes: Vec<usize>,
}

impl ComponentSizes {
    /// Builds the multiset from sizes in any order.
    ///
    /// A component always holds at least one point, so zero sizes are
    /// dropped.
    #[must_use]
    pub fn from_sizes(mut sizes: Vec<usize>) -> Self {
        sizes.retain(|&size| size > 0);
        sizes.sort_unstable_by(|left, right| right.cmp(left));
        Self { sizes }
    }

    /// Returns the sizes, largest first.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_slice(&self) -> &[usize] { &self.sizes }

    /// Returns the number of components.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.sizes.len() }

    /// Returns `true` when there are no components (no points).
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.sizes.is_empty() }

    /// Returns the total number of points across all components.
    #[must_use]
    pub fn total(&self) -> usize {
        self.sizes.iter().sum()
    }

    /// Returns the `count` largest sizes, or all of them when fewer exist.
    #[must_use]
    pub fn largest(&self, count: usize) -> &[usize] {
        let end = count.min(self.sizes.len());
        self.sizes.get(..end).unwrap_or_default()
    }

    /// Multiplies the `count` largest sizes.
    ///
    /// When fewer than `count` components exist all of them are multiplied;
    /// the empty product is 1. Returns `None` on overflow.
    #[must_use]
    pub fn product_of_largest(&self, count: usize) -> Option<u128> {
        self.largest(count)
            .iter()
            .try_fold(1_u128, |product, &size| {
                u128::try_from(size)
                    .ok()
                    .and_then(|size| product.checked_mul(size))
            })
    }

    /// Iterates over the sizes, largest first.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.sizes.iter().copied()
    }

    /// Consumes the multiset, returning the sizes largest first.
    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.sizes
    }
}

/// The edge whose union first left a single component.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectingEdge {
    left: Point,
    right: Point,
    edge: Edge,
    edges_examined: usize,
}

impl ConnectingEdge {
    /// Returns the point at the edge's smaller index.
    #[must_use]
    #[rustfmt::skip]
    pub fn left(&self) -> &Point { &self.left }

    /// Returns the point at the edge's larger index.
    #[must_use]
    #[rustfmt::skip]
    pub fn right(&self) -> &Point { &self.right }

    /// Returns the underlying edge (indices and squared distance).
    #[must_use]
    #[rustfmt::skip]
    pub fn edge(&self) -> Edge { self.edge }

    /// Returns how many sorted edges were examined, including this one.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges_examined(&self) -> usize { self.edges_examined }

    /// Consumes the result, returning the two original points.
    #[must_use]
    pub fn into_pair(self) -> (Point, Point) {
        (self.left, self.right)
    }
}

/// Applies the `edge_limit` shortest edges and returns the resulting
/// component sizes.
///
/// `edge_limit` is clamped to the number of available edges.
///
/// # Errors
/// Propagates edge generation failures (mixed arities, distance overflow).
///
/// # Examples
/// ```
/// use tether_core::{Point, compute_bounded_components};
///
/// let points = [[0, 0], [0, 1], [0, 2], [5, 5]].map(Point::from);
/// let sizes = compute_bounded_components(&points, 2)?;
/// assert_eq!(sizes.as_slice(), &[3, 1]);
/// # Ok::<(), tether_core::ConnectivityError>(())
/// ```
pub fn compute_bounded_components(points: &[Point], edge_limit: usize) -> Result<ComponentSizes> {
    Engine::default().bounded_components(points, edge_limit)
}

/// Returns the first edge, in sorted order, whose union connects every point.
///
/// # Errors
/// - [`ConnectivityError::NoConnectingEdge`] when fewer than two points are
///   supplied.
/// - Edge generation failures (mixed arities, distance overflow).
///
/// # Examples
/// ```
/// use tether_core::{Point, find_first_fully_connecting_edge};
///
/// let points = [[0, 0], [1, 0], [100, 100], [101, 100]].map(Point::from);
/// let (left, right) = find_first_fully_connecting_edge(&points)?.into_pair();
/// assert_eq!((left, right), (Point::from([1, 0]), Point::from([100, 100])));
/// # Ok::<(), tether_core::ConnectivityError>(())
/// ```
pub fn find_first_fully_connecting_edge(points: &[Point]) -> Result<ConnectingEdge> {
    Engine::default().first_fully_connecting_edge(points)
}

#[instrument(
    name = "connectivity.bounded",
    err,
    skip(points),
    fields(point_count = points.len()),
)]
pub(crate) fn bounded_components(
    points: &[Point],
    edge_limit: usize,
    backend: Backend,
) -> Result<ComponentSizes> {
    let edges = edges::generate(points, backend)?;
    let applied = edge_limit.min(edges.len());
    if applied < edge_limit {
        debug!(edge_limit, available = edges.len(), "edge limit clamped");
    }

    let mut set = DisjointSet::new(points.len());
    let mut merges = 0_usize;
    for edge in edges.iter().take(applied) {
        if set.union(edge.source(), edge.target())? {
            merges += 1;
        }
    }
    record_unions(merges);

    let sizes = ComponentSizes::from_sizes(set.all_component_sizes());
    info!(
        applied,
        merges,
        components = sizes.len(),
        "bounded connectivity computed"
    );
    Ok(sizes)
}

#[instrument(
    name = "connectivity.full",
    err,
    skip(points),
    fields(point_count = points.len()),
)]
pub(crate) fn first_fully_connecting_edge(
    points: &[Point],
    backend: Backend,
) -> Result<ConnectingEdge> {
    if points.len() < 2 {
        return Err(ConnectivityError::NoConnectingEdge {
            points: points.len(),
        });
    }

    let edges = edges::generate(points, backend)?;
    let mut set = DisjointSet::new(points.len());
    let mut merges = 0_usize;
    for (position, edge) in edges.iter().enumerate() {
        if !set.union(edge.source(), edge.target())? {
            continue;
        }
        merges += 1;
        if set.component_count() == 1 {
            record_unions(merges);
            let connecting = connecting_edge(points, *edge, position + 1)?;
            debug!(
                left = %connecting.left,
                right = %connecting.right,
                "connecting edge found"
            );
            info!(
                source = edge.source(),
                target = edge.target(),
                distance = %edge.distance(),
                edges_examined = connecting.edges_examined,
                "full connectivity reached"
            );
            return Ok(connecting);
        }
    }

    // Unreachable for two or more points: the complete edge set always
    // connects them.
    record_unions(merges);
    Err(ConnectivityError::NoConnectingEdge {
        points: points.len(),
    })
}

fn connecting_edge(points: &[Point], edge: Edge, edges_examined: usize) -> Result<ConnectingEdge> {
    let endpoint = |index: usize| {
        points
            .get(index)
            .cloned()
            .ok_or(ConnectivityError::IndexOutOfRange {
                index,
                len: points.len(),
            })
    };
    Ok(ConnectingEdge {
        left: endpoint(edge.source())?,
        right: endpoint(edge.target())?,
        edge,
        edges_examined,
    })
}

#[cfg_attr(
    not(feature = "metrics"),
    expect(unused_variables, reason = "counter only emitted with the metrics feature")
)]
fn record_unions(merges: usize) {
    #[cfg(feature = "metrics")]
    metrics::counter!("tether_unions_applied_total")
        .increment(u64::try_from(merges).unwrap_or(u64::MAX));
}
