//! Facade crate for the HGS routing workspace.
//!
//! This crate re-exports the core domain types and, behind the `native`
//! feature, the solver backed by the HGS-CVRP shared library.

#![forbid(unsafe_code)]

pub use hgs_core::{
    AlgorithmConfig, DistanceMatrix, DistanceRounding, EngineError, EntryPoint, InstanceData,
    InstanceField, ProblemInstance, Solution, SolveError, Solver, TspData, UNBOUNDED_DURATION,
    UNBOUNDED_VEHICLES, ValidationError,
};

#[cfg(feature = "native")]
pub use hgs_native::{HgsSolver, LIBRARY_PATH_ENV, LoadError, NativeEngine};
