//! Errors raised while configuring a simulation run.

use std::num::ParseIntError;

/// Invalid workload configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkloadError {
    #[error("push probability {0} is outside [0.0, 1.0]")]
    InvalidProbability(f64),

    #[error("coordinate bound {0} must not be negative")]
    NegativeBound(i32),

    #[error("operations count {count} exceeds maximum {max}")]
    TooManyOperations { count: u64, max: u64 },
}

/// Unusable `DST_SEED` value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("DST_SEED must be a valid u64, got {value:?}")]
    Invalid {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("DST_SEED must not be zero")]
    Zero,

    #[error("DST_SEED is not valid unicode")]
    NotUnicode,
}
