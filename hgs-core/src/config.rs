//! Search parameters handed to the native engine.
//!
//! The defaults mirror the engine's documented defaults. Sentinels for
//! "unbounded" fleet size and route duration are named constants rather than
//! module state, so callers and the native layer agree on them explicitly.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fleet size used when the caller does not bound the number of vehicles.
///
/// This is the largest value the engine's 32-bit signed vehicle count can hold.
pub const UNBOUNDED_VEHICLES: i32 = i32::MAX;

/// Duration limit passed to the engine when no duration constraint applies.
pub const UNBOUNDED_DURATION: f64 = f64::MAX;

/// Default granular neighbourhood size.
pub const DEFAULT_NB_GRANULAR: i32 = 20;
/// Default population size.
pub const DEFAULT_MU: i32 = 25;
/// Default number of offspring per generation.
pub const DEFAULT_LAMBDA: i32 = 40;
/// Default number of elite individuals.
pub const DEFAULT_NB_ELITE: i32 = 4;
/// Default number of close individuals used for diversity.
pub const DEFAULT_NB_CLOSE: i32 = 5;
/// Default target proportion of feasible individuals.
pub const DEFAULT_TARGET_FEASIBLE: f64 = 0.2;
/// Default random seed.
pub const DEFAULT_SEED: i32 = 0;
/// Default iterations without improvement before the search stops.
pub const DEFAULT_NB_ITER: i32 = 20_000;
/// Default time budget in seconds; zero leaves the search iteration-bound.
pub const DEFAULT_TIME_LIMIT: f64 = 0.0;

/// Parameters for one native search.
///
/// Construct once (usually from [`Default`] plus the builder methods) and
/// share by reference. The native layer packs a snapshot of it immediately
/// before each call and never mutates it.
///
/// Counts use the engine's 32-bit signed width so that packing is a plain
/// field copy.
///
/// # Examples
/// ```rust
/// use std::time::Duration;
/// use hgs_core::AlgorithmConfig;
///
/// let config = AlgorithmConfig::default()
///     .with_time_limit(Duration::from_millis(1100))
///     .with_seed(12);
/// assert_eq!(config.seed, 12);
/// assert!((config.time_limit - 1.1).abs() < 1e-9);
/// assert!(config.use_swap_star);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlgorithmConfig {
    /// Granular search parameter: neighbours considered per node.
    pub nb_granular: i32,
    /// Minimum population size (μ).
    pub mu: i32,
    /// Number of solutions created before reaching the maximum population (λ).
    pub lambda: i32,
    /// Number of elite individuals.
    pub nb_elite: i32,
    /// Number of closest individuals used when computing diversity.
    pub nb_close: i32,
    /// Target proportion of feasible individuals in the population.
    pub target_feasible: f64,
    /// Seed for the engine's random number generator.
    pub seed: i32,
    /// Iterations without improvement before termination.
    pub nb_iter: i32,
    /// CPU time budget in seconds; `0.0` means no time limit.
    pub time_limit: f64,
    /// Whether the SWAP* neighbourhood is explored.
    pub use_swap_star: bool,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            nb_granular: DEFAULT_NB_GRANULAR,
            mu: DEFAULT_MU,
            lambda: DEFAULT_LAMBDA,
            nb_elite: DEFAULT_NB_ELITE,
            nb_close: DEFAULT_NB_CLOSE,
            target_feasible: DEFAULT_TARGET_FEASIBLE,
            seed: DEFAULT_SEED,
            nb_iter: DEFAULT_NB_ITER,
            time_limit: DEFAULT_TIME_LIMIT,
            use_swap_star: true,
        }
    }
}

impl AlgorithmConfig {
    /// Set the time budget.
    #[must_use]
    pub const fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit.as_secs_f64();
        self
    }

    /// Set the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of iterations without improvement before stopping.
    #[must_use]
    pub const fn with_iterations(mut self, nb_iter: i32) -> Self {
        self.nb_iter = nb_iter;
        self
    }

    /// Enable or disable the SWAP* neighbourhood.
    #[must_use]
    pub const fn with_swap_star(mut self, enabled: bool) -> Self {
        self.use_swap_star = enabled;
        self
    }
}
