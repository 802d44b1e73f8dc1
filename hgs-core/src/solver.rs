//! The [`Solver`] boundary shared by every backend.

use std::fmt;

use thiserror::Error;

use crate::{AlgorithmConfig, InstanceData, ProblemInstance, Solution, TspData, ValidationError};

/// Native solve function used for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    /// `solve_cvrp`: the engine derives distances from coordinates.
    Coordinates,
    /// `solve_cvrp_dist_mtx`: distances come from the supplied matrix.
    DistanceMatrix,
}

impl EntryPoint {
    /// Pick the entry point for `instance`.
    ///
    /// A matrix always wins; coordinates supplied alongside it only help the
    /// engine build its neighbourhoods.
    #[must_use]
    pub const fn for_instance(instance: &ProblemInstance) -> Self {
        if instance.distance_matrix().is_some() {
            Self::DistanceMatrix
        } else {
            Self::Coordinates
        }
    }

    /// Exported symbol name.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Coordinates => "solve_cvrp",
            Self::DistanceMatrix => "solve_cvrp_dist_mtx",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Failures reported by the native engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The engine returned a null solution pointer.
    #[error("{entry_point} returned no solution")]
    NullSolution {
        /// Entry point that was called.
        entry_point: EntryPoint,
    },
    /// The returned solution structure could not be decoded.
    #[error("native solution is malformed: {reason}")]
    MalformedSolution {
        /// What was wrong with it.
        reason: String,
    },
}

/// Errors returned by [`Solver`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The input was rejected before any native call.
    #[error("invalid instance: {0}")]
    Validation(#[from] ValidationError),
    /// The native engine failed.
    #[error("engine failure: {0}")]
    Engine(#[from] EngineError),
}

/// Solve routing instances with an external engine.
///
/// Implementations block until the engine returns. Solvers must be
/// `Send + Sync`; implementations serialise calls that share a native handle.
pub trait Solver: Send + Sync {
    /// Solve a validated CVRP instance.
    ///
    /// # Errors
    /// Returns [`SolveError::Engine`] when the engine fails, or
    /// [`SolveError::Validation`] when the instance cannot be marshaled.
    fn solve_cvrp(
        &self,
        instance: &ProblemInstance,
        config: &AlgorithmConfig,
        verbose: bool,
    ) -> Result<Solution, SolveError>;

    /// Validate a raw record, then solve it as a CVRP.
    ///
    /// # Errors
    /// Returns [`SolveError::Validation`] for malformed input, otherwise as
    /// [`Solver::solve_cvrp`].
    fn solve_cvrp_data(
        &self,
        data: InstanceData,
        config: &AlgorithmConfig,
        verbose: bool,
    ) -> Result<Solution, SolveError> {
        let instance = ProblemInstance::try_from(data)?;
        self.solve_cvrp(&instance, config, verbose)
    }

    /// Solve a TSP by reducing it to a single-vehicle CVRP.
    ///
    /// # Errors
    /// As [`Solver::solve_cvrp_data`].
    fn solve_tsp(
        &self,
        instance: &TspData,
        config: &AlgorithmConfig,
        verbose: bool,
    ) -> Result<Solution, SolveError> {
        let reduced = instance.reduce()?;
        self.solve_cvrp(&reduced, config, verbose)
    }
}
