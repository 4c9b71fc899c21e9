//! Tether core library.
//!
//! Incremental connectivity over integer point sets: every pair of points is
//! weighted by squared Euclidean distance, pairs are replayed shortest first
//! into a union-find structure, and two queries read the result.
//!
//! - [`compute_bounded_components`] applies a bounded prefix of the sorted
//!   edges and reports the component sizes.
//! - [`find_first_fully_connecting_edge`] returns the first edge after which
//!   every point shares one component.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the queries emit:
//!
//! - `tether_edges_generated_total` (counter)
//! - `tether_unions_applied_total` (counter)
//!
//! These metric names are stable for downstream crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod connectivity;
mod disjoint_set;
mod distance;
mod edges;
mod engine;
mod error;
mod point;
#[cfg(test)]
mod test_utils;

pub use crate::{
    connectivity::{
        ComponentSizes, ConnectingEdge, compute_bounded_components,
        find_first_fully_connecting_edge,
    },
    disjoint_set::DisjointSet,
    distance::{DistanceError, DistanceErrorCode, squared_euclidean_distance},
    edges::{Edge, generate_edges, total_edge_count},
    engine::{Engine, EngineBuilder, ExecutionStrategy},
    error::{ConnectivityError, ConnectivityErrorCode, Result},
    point::Point,
};
