//! # ps-dst
//!
//! Deterministic Simulation Testing for the point stack.
//!
//! All randomness flows from one seed, so a failing run is reproduced by
//! rerunning with the same seed.
//!
//! ## Usage
//!
//! ```rust
//! use ps_dst::{DeterministicRng, StackOp, WorkloadConfig, WorkloadGenerator};
//!
//! let rng = DeterministicRng::new(12345);
//! let mut generator = WorkloadGenerator::new(rng, WorkloadConfig::default()).unwrap();
//!
//! for op in generator.generate() {
//!     match op {
//!         StackOp::Push(_point) => { /* push onto the stack under test */ }
//!         StackOp::Pop => { /* pop and compare */ }
//!     }
//! }
//! ```
//!
//! ## Reproducibility
//!
//! To reproduce a failing test:
//! ```bash
//! DST_SEED=12345 cargo test
//! ```

pub mod error;
pub mod random;
pub mod workload;

pub use error::{SeedError, WorkloadError};
pub use random::DeterministicRng;
pub use workload::{StackOp, WorkloadConfig, WorkloadGenerator, WorkloadStats};

/// Environment variable holding the seed to reproduce.
pub const SEED_ENV: &str = "DST_SEED";

/// Environment variable holding the number of seeded runs.
pub const ITERATIONS_ENV: &str = "DST_ITERATIONS";

/// Seeded runs per test when `DST_ITERATIONS` is unset.
pub const ITERATIONS_DEFAULT: u64 = 16;

/// Read the DST seed from the environment.
///
/// Returns `Ok(None)` when `DST_SEED` is unset.
pub fn try_seed_from_env() -> Result<Option<u64>, SeedError> {
    match std::env::var(SEED_ENV) {
        Ok(s) => parse_seed(&s).map(Some),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(SeedError::NotUnicode),
    }
}

fn parse_seed(raw: &str) -> Result<u64, SeedError> {
    let seed: u64 = raw.trim().parse().map_err(|source| SeedError::Invalid {
        value: raw.to_string(),
        source,
    })?;
    if seed == 0 {
        return Err(SeedError::Zero);
    }
    Ok(seed)
}

/// Get DST seed from environment or generate random one.
///
/// Logs the seed for reproduction. Use `DST_SEED=<seed>` to reproduce.
/// An unusable `DST_SEED` is logged and replaced by a random seed.
#[must_use]
pub fn get_or_generate_seed() -> u64 {
    match try_seed_from_env() {
        Ok(Some(seed)) => {
            tracing::info!(seed, "DST_SEED={} (from environment)", seed);
            seed
        }
        Ok(None) => generate_seed(),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring {}", SEED_ENV);
            generate_seed()
        }
    }
}

fn generate_seed() -> u64 {
    // Zero is reserved; see `DeterministicRng::new`.
    let seed = rand::random::<u64>().max(1);
    tracing::info!(seed, "DST_SEED={} (randomly generated)", seed);
    seed
}

/// Number of seeded runs, from `DST_ITERATIONS` or the default.
#[must_use]
pub fn iterations_from_env() -> u64 {
    std::env::var(ITERATIONS_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(ITERATIONS_DEFAULT)
}
