//! Benchmark setup error type.
//!
//! Lets setup helpers propagate failures with `?` so bench bodies never call
//! `.expect()`.

use crate::source::SyntheticError;
use tether_core::ConnectivityError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic point generation failed.
    #[error("synthetic point generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The engine rejected the configuration or a warm-up query failed.
    #[error("connectivity query failed: {0}")]
    Connectivity(#[from] ConnectivityError),
}
