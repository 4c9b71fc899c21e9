//! Benchmark support crate for tether.
//!
//! Provides seeded synthetic point sets and parameter labels used by the
//! Criterion benchmarks for edge generation and both connectivity queries.

pub mod error;
pub mod params;
pub mod source;
