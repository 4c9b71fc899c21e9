//! Error types for the tether core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::{distance::DistanceError, engine::ExecutionStrategy};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// Error type produced by the disjoint-set structure and the connectivity
/// queries.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConnectivityError {
    /// A disjoint set was requested with a negative or unrepresentable size.
    #[error("disjoint set size must be non-negative (got {requested})")]
    InvalidSize {
        /// The size supplied by the caller.
        requested: i64,
    },
    /// An element index fell outside `[0, len)`.
    #[error("index {index} is out of range for {len} elements")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of elements tracked by the structure.
        len: usize,
    },
    /// No edge reduced the point set to a single component.
    #[error("no edge connects all {points} points")]
    NoConnectingEdge {
        /// Number of points supplied to the query.
        points: usize,
    },
    /// A point did not share the arity of the first point in the set.
    #[error("point {index} has {actual} dimensions but {expected} were expected")]
    DimensionMismatch {
        /// Index of the offending point.
        index: usize,
        /// Arity established by the first point.
        expected: usize,
        /// Arity of the offending point.
        actual: usize,
    },
    /// Computing the distance between two points failed.
    #[error("distance between points {left} and {right} failed: {error}")]
    Distance {
        /// Index of the first point.
        left: usize,
        /// Index of the second point.
        right: usize,
        #[source]
        /// Underlying distance error.
        error: DistanceError,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
}

define_error_codes! {
    /// Stable codes describing [`ConnectivityError`] variants.
    enum ConnectivityErrorCode for ConnectivityError {
        /// A disjoint set was requested with a negative size.
        InvalidSize => InvalidSize { .. } => "INVALID_SIZE",
        /// An element index fell outside the structure.
        IndexOutOfRange => IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
        /// No edge reduced the point set to a single component.
        NoConnectingEdge => NoConnectingEdge { .. } => "NO_CONNECTING_EDGE",
        /// Points in one set had different arities.
        DimensionMismatch => DimensionMismatch { .. } => "DIMENSION_MISMATCH",
        /// A pairwise distance could not be computed.
        DistanceFailure => Distance { .. } => "DISTANCE_FAILURE",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "BACKEND_UNAVAILABLE",
    }
}

impl ConnectivityError {
    /// Retrieve the inner [`crate::DistanceErrorCode`] when the error
    /// originated in a distance computation.
    #[must_use]
    pub const fn distance_code(&self) -> Option<crate::DistanceErrorCode> {
        match self {
            Self::Distance { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ConnectivityError>;
