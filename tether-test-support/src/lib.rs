//! Shared test utilities used across tether crates.
//!
//! - [`tracing`] captures spans and events so suites can assert
//!   instrumentation.
//! - [`property`] reads the environment overrides that tune proptest runs.
//! - [`fixtures`] holds deterministic coordinate sets with known answers.

pub mod fixtures;
pub mod property;
pub mod tracing;
