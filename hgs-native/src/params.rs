//! Packing of [`AlgorithmConfig`] into the engine's parameter block.

use hgs_core::AlgorithmConfig;

use crate::ffi::{CAlgorithmParameters, flag};

impl From<&AlgorithmConfig> for CAlgorithmParameters {
    fn from(config: &AlgorithmConfig) -> Self {
        Self {
            nb_granular: config.nb_granular,
            mu: config.mu,
            lambda: config.lambda,
            nb_elite: config.nb_elite,
            nb_close: config.nb_close,
            target_feasible: config.target_feasible,
            seed: config.seed,
            nb_iter: config.nb_iter,
            time_limit: config.time_limit,
            use_swap_star: flag(config.use_swap_star),
        }
    }
}
