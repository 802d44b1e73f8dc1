//! Core domain types for the HGS routing facade.
//!
//! A routing problem enters the workspace as a loosely typed
//! [`InstanceData`] record (or a [`TspData`] record for travelling salesman
//! requests). Validation turns it into a [`ProblemInstance`], which is the
//! only form the solver boundary accepts. Algorithm parameters live in
//! [`AlgorithmConfig`] and results come back as an owned [`Solution`].
//!
//! The search itself is performed by an external engine; implementations of
//! the [`Solver`] trait (see the `hgs-native` crate) bridge to it.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod instance;
mod solution;
mod solver;
mod tsp;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use config::{AlgorithmConfig, UNBOUNDED_DURATION, UNBOUNDED_VEHICLES};
pub use instance::{
    DistanceMatrix, DistanceRounding, InstanceData, InstanceField, ProblemInstance,
    ValidationError,
};
pub use solution::Solution;
pub use solver::{EngineError, EntryPoint, SolveError, Solver};
pub use tsp::TspData;
