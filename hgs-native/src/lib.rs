//! Native bridge to the HGS-CVRP engine.
//!
//! [`HgsSolver`] implements [`hgs_core::Solver`] by loading `libhgscvrp` at
//! run time, packing the caller's [`hgs_core::AlgorithmConfig`], marshaling a
//! validated instance into contiguous buffers and copying the engine's
//! solution back into owned memory. The engine's result is released exactly
//! once, whether decoding succeeds or not.
//!
//! The library is located through the `HGS_LIBRARY_PATH` environment variable
//! or the platform's default library search path.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod decode;
mod dispatch;
pub mod ffi;
mod library;
mod params;
mod solver;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use library::{EngineApi, LIBRARY_PATH_ENV, LoadError, NativeEngine, default_library_path};
pub use solver::HgsSolver;
