//! Deterministic stack workloads.
//!
//! A workload is a seeded sequence of push and pop operations. The mix is
//! controlled by `WorkloadConfig`; the same seed and config always produce
//! the same sequence.

use ps_core::Point;

use crate::error::WorkloadError;
use crate::random::DeterministicRng;

/// Upper limit on operations in one workload.
pub const OPERATIONS_COUNT_MAX: u64 = 1_000_000;

/// Configuration for workload generation.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadConfig {
    /// Number of operations to generate
    pub operations_count: u64,
    /// Probability that an operation is a push (0.0 to 1.0)
    pub push_probability: f64,
    /// Pushed coordinates fall in `-coordinate_bound..=coordinate_bound`
    pub coordinate_bound: i32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            operations_count: 1_000,
            push_probability: 0.6,
            coordinate_bound: 100,
        }
    }
}

impl WorkloadConfig {
    /// Mostly pushes; grows deep chains.
    #[must_use]
    pub fn push_heavy() -> Self {
        Self {
            operations_count: 10_000,
            push_probability: 0.9,
            coordinate_bound: 1_000,
        }
    }

    /// Mostly pops; spends much of the run on an empty stack.
    #[must_use]
    pub fn pop_heavy() -> Self {
        Self {
            operations_count: 1_000,
            push_probability: 0.3,
            coordinate_bound: 100,
        }
    }

    /// Every pushed point is the origin, so only emptiness tells pops apart.
    #[must_use]
    pub fn origin_only() -> Self {
        Self {
            operations_count: 500,
            push_probability: 0.5,
            coordinate_bound: 0,
        }
    }

    /// Check that the configuration describes a runnable workload.
    pub fn validate(&self) -> Result<(), WorkloadError> {
        if !(0.0..=1.0).contains(&self.push_probability) {
            return Err(WorkloadError::InvalidProbability(self.push_probability));
        }
        if self.coordinate_bound < 0 {
            return Err(WorkloadError::NegativeBound(self.coordinate_bound));
        }
        if self.operations_count > OPERATIONS_COUNT_MAX {
            return Err(WorkloadError::TooManyOperations {
                count: self.operations_count,
                max: OPERATIONS_COUNT_MAX,
            });
        }
        Ok(())
    }
}

/// A single generated stack operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    Push(Point),
    Pop,
}

/// Deterministic workload generator.
pub struct WorkloadGenerator {
    rng: DeterministicRng,
    config: WorkloadConfig,
    pushes_count: u64,
    pops_count: u64,
}

impl WorkloadGenerator {
    /// Create a generator; fails if the config is invalid.
    pub fn new(rng: DeterministicRng, config: WorkloadConfig) -> Result<Self, WorkloadError> {
        config.validate()?;

        Ok(Self {
            rng,
            config,
            pushes_count: 0,
            pops_count: 0,
        })
    }

    /// Seed the generator's RNG directly.
    pub fn from_seed(seed: u64, config: WorkloadConfig) -> Result<Self, WorkloadError> {
        Self::new(DeterministicRng::new(seed), config)
    }

    /// Produce the next operation.
    pub fn next_op(&mut self) -> StackOp {
        if self.rng.gen_bool(self.config.push_probability) {
            self.pushes_count += 1;
            StackOp::Push(self.rng.gen_point(self.config.coordinate_bound))
        } else {
            self.pops_count += 1;
            StackOp::Pop
        }
    }

    /// Produce `operations_count` operations.
    pub fn generate(&mut self) -> Vec<StackOp> {
        let ops: Vec<StackOp> = (0..self.config.operations_count)
            .map(|_| self.next_op())
            .collect();

        tracing::debug!(
            seed = self.rng.seed(),
            pushes = self.pushes_count,
            pops = self.pops_count,
            "generated workload"
        );
        ops
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Get statistics about generated operations.
    #[must_use]
    pub fn stats(&self) -> WorkloadStats {
        WorkloadStats {
            pushes_count: self.pushes_count,
            pops_count: self.pops_count,
        }
    }
}

/// Statistics about generated operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadStats {
    pub pushes_count: u64,
    pub pops_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for config in [
            WorkloadConfig::default(),
            WorkloadConfig::push_heavy(),
            WorkloadConfig::pop_heavy(),
            WorkloadConfig::origin_only(),
        ] {
            assert_eq!(config.validate(), Ok(()), "{:?}", config);
        }
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let bad_probability = WorkloadConfig {
            push_probability: 1.5,
            ..WorkloadConfig::default()
        };
        assert_eq!(
            bad_probability.validate(),
            Err(WorkloadError::InvalidProbability(1.5))
        );

        let bad_bound = WorkloadConfig {
            coordinate_bound: -1,
            ..WorkloadConfig::default()
        };
        assert!(matches!(
            WorkloadGenerator::from_seed(1, bad_bound),
            Err(WorkloadError::NegativeBound(-1))
        ));

        let too_long = WorkloadConfig {
            operations_count: OPERATIONS_COUNT_MAX + 1,
            ..WorkloadConfig::default()
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_deterministic_workloads() {
        let mut gen1 = WorkloadGenerator::from_seed(42, WorkloadConfig::default()).unwrap();
        let mut gen2 = WorkloadGenerator::from_seed(42, WorkloadConfig::default()).unwrap();

        assert_eq!(gen1.generate(), gen2.generate());
        assert_eq!(gen1.stats(), gen2.stats());
    }

    #[test]
    fn test_generate_length_and_stats() {
        let mut generator = WorkloadGenerator::from_seed(7, WorkloadConfig::default()).unwrap();
        let ops = generator.generate();

        assert_eq!(ops.len() as u64, generator.config().operations_count);
        let stats = generator.stats();
        assert_eq!(stats.pushes_count + stats.pops_count, ops.len() as u64);

        let pushes = ops.iter().filter(|op| matches!(op, StackOp::Push(_))).count() as u64;
        assert_eq!(pushes, stats.pushes_count);
    }

    #[test]
    fn test_push_probability_extremes() {
        let all_push = WorkloadConfig {
            operations_count: 100,
            push_probability: 1.0,
            coordinate_bound: 10,
        };
        let ops = WorkloadGenerator::from_seed(3, all_push).unwrap().generate();
        assert!(ops.iter().all(|op| matches!(op, StackOp::Push(_))));

        let all_pop = WorkloadConfig {
            push_probability: 0.0,
            ..WorkloadConfig::default()
        };
        let ops = WorkloadGenerator::from_seed(3, all_pop).unwrap().generate();
        assert!(ops.iter().all(|op| *op == StackOp::Pop));
    }

    #[test]
    fn test_origin_only_pushes_origin() {
        let ops = WorkloadGenerator::from_seed(11, WorkloadConfig::origin_only())
            .unwrap()
            .generate();

        for op in ops {
            if let StackOp::Push(p) = op {
                assert_eq!(p, Point::ORIGIN);
            }
        }
    }
}
