//! [`Solver`] implementation backed by the native engine.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use hgs_core::{AlgorithmConfig, ProblemInstance, Solution, SolveError, Solver};

use crate::dispatch::dispatch;
use crate::ffi::CAlgorithmParameters;
use crate::library::{LoadError, NativeEngine};

/// Solve CVRP and TSP instances with the HGS-CVRP engine.
///
/// Calls on one solver are serialised; the engine itself keeps no state
/// between calls.
///
/// # Examples
/// ```rust,no_run
/// use hgs_core::{AlgorithmConfig, InstanceData, Solver};
/// use hgs_native::HgsSolver;
///
/// let solver = HgsSolver::load_default()?;
/// let instance = InstanceData::new(vec![0.0, 1.0, 1.0], 2.0)
///     .with_coordinates(vec![0.0, 3.0, 0.0], vec![0.0, 0.0, 4.0])
///     .build()?;
/// let solution = solver.solve_cvrp(&instance, &AlgorithmConfig::default(), false)?;
/// println!("cost {}", solution.cost);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct HgsSolver {
    engine: NativeEngine,
    lock: Mutex<()>,
}

impl HgsSolver {
    /// Wrap an already loaded engine.
    #[must_use]
    pub const fn new(engine: NativeEngine) -> Self {
        Self {
            engine,
            lock: Mutex::new(()),
        }
    }

    /// Load the engine from `path`.
    ///
    /// # Errors
    /// Returns [`LoadError`] when the library cannot be opened or lacks an
    /// entry point.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        NativeEngine::load(path).map(Self::new)
    }

    /// Load the engine from its default location.
    ///
    /// # Errors
    /// As [`NativeEngine::load_default`].
    pub fn load_default() -> Result<Self, LoadError> {
        NativeEngine::load_default().map(Self::new)
    }

    /// The underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &NativeEngine {
        &self.engine
    }
}

impl Solver for HgsSolver {
    fn solve_cvrp(
        &self,
        instance: &ProblemInstance,
        config: &AlgorithmConfig,
        verbose: bool,
    ) -> Result<Solution, SolveError> {
        let parameters = CAlgorithmParameters::from(config);
        // The lock guards no data, so a poisoned lock is still usable.
        let _serialised = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let native = dispatch(self.engine.api(), instance, &parameters, verbose)?;
        Ok(native.decode()?)
    }
}
