//! Engine configuration and entry points.
//!
//! Exposes the execution strategy selection surface and the builder
//! validation used before constructing [`Engine`] instances.

use tracing::debug;

use crate::{
    ConnectingEdge, Point,
    connectivity::{self, ComponentSizes},
    edges::Backend,
    error::Result,
};

/// Selects how the pairwise distance pass runs.
///
/// `Auto` resolves deterministically: the rayon backend when the `parallel`
/// feature is compiled in, the sequential loop otherwise. Every strategy
/// yields the same edge order and therefore the same query results.
///
/// # Examples
/// ```
/// use tether_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::default();
/// assert_eq!(strategy, ExecutionStrategy::Auto);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Allow the library to select a backend.
    #[default]
    Auto,
    /// Compute distances on the calling thread.
    Sequential,
    /// Compute distances on the rayon thread pool.
    Parallel,
}

/// Configures and constructs [`Engine`] instances.
///
/// # Examples
/// ```
/// use tether_core::{EngineBuilder, ExecutionStrategy};
///
/// let engine = EngineBuilder::new()
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()
///     .expect("sequential execution is always available");
/// assert_eq!(engine.execution_strategy(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    execution_strategy: ExecutionStrategy,
}

impl EngineBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the execution strategy to use for edge generation.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Validates the configuration and constructs an [`Engine`].
    ///
    /// # Errors
    /// Returns [`crate::ConnectivityError::BackendUnavailable`] when
    /// [`ExecutionStrategy::Parallel`] is requested without the `parallel`
    /// feature.
    pub fn build(self) -> Result<Engine> {
        let backend = resolve_backend(self.execution_strategy)?;
        debug!(strategy = ?self.execution_strategy, ?backend, "engine configured");
        Ok(Engine {
            execution_strategy: self.execution_strategy,
            backend,
        })
    }
}

fn resolve_backend(strategy: ExecutionStrategy) -> Result<Backend> {
    match strategy {
        ExecutionStrategy::Auto => Ok(Backend::default()),
        ExecutionStrategy::Sequential => Ok(Backend::Sequential),
        #[cfg(feature = "parallel")]
        ExecutionStrategy::Parallel => Ok(Backend::Parallel),
        #[cfg(not(feature = "parallel"))]
        ExecutionStrategy::Parallel => Err(crate::ConnectivityError::BackendUnavailable {
            requested: ExecutionStrategy::Parallel,
        }),
    }
}

/// Runs connectivity queries over point sets.
///
/// An engine holds configuration only; every query builds and discards its
/// own edge list and disjoint set.
///
/// # Examples
/// ```
/// use tether_core::{Engine, Point};
///
/// let engine = Engine::default();
/// let points = [[0, 0, 0], [0, 0, 1], [9, 9, 9]].map(Point::from);
/// let sizes = engine.bounded_components(&points, 1)?;
/// assert_eq!(sizes.as_slice(), &[2, 1]);
/// # Ok::<(), tether_core::ConnectivityError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    execution_strategy: ExecutionStrategy,
    backend: Backend,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            execution_strategy: ExecutionStrategy::Auto,
            backend: Backend::default(),
        }
    }
}

impl Engine {
    /// Returns the execution strategy the engine was built with.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Applies the `edge_limit` shortest edges and returns the component
    /// sizes. Limits beyond the available edge count are clamped.
    ///
    /// # Errors
    /// Returns [`crate::ConnectivityError::DimensionMismatch`] or
    /// [`crate::ConnectivityError::Distance`] when edge generation fails.
    pub fn bounded_components(&self, points: &[Point], edge_limit: usize) -> Result<ComponentSizes> {
        connectivity::bounded_components(points, edge_limit, self.backend)
    }

    /// Returns the first edge whose union connects every point.
    ///
    /// # Errors
    /// Returns [`crate::ConnectivityError::NoConnectingEdge`] for fewer than two
    /// points, or an edge generation error.
    pub fn first_fully_connecting_edge(&self, points: &[Point]) -> Result<ConnectingEdge> {
        connectivity::first_fully_connecting_edge(points, self.backend)
    }
}
