//! Runtime loading of the HGS-CVRP shared library.

use std::path::{Path, PathBuf};

use libloading::Library;
use log::debug;
use thiserror::Error;

use crate::ffi::{DeleteSolutionFn, SolveCvrpDistMtxFn, SolveCvrpFn};

/// Environment variable naming the shared library to load.
pub const LIBRARY_PATH_ENV: &str = "HGS_LIBRARY_PATH";

const LIBRARY_NAME: &str = "hgscvrp";
const SOLVE_CVRP: &str = "solve_cvrp";
const SOLVE_CVRP_DIST_MTX: &str = "solve_cvrp_dist_mtx";
const DELETE_SOLUTION: &str = "delete_solution";

/// Errors raised while opening the engine library.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The library could not be opened.
    #[error("failed to open native library {path}: {source}")]
    Open {
        /// Path handed to the dynamic loader.
        path: PathBuf,
        /// Loader error.
        #[source]
        source: libloading::Error,
    },
    /// The library does not export a required entry point.
    #[error("native library {path} does not export `{symbol}`: {source}")]
    MissingSymbol {
        /// Library path.
        path: PathBuf,
        /// Missing symbol name.
        symbol: &'static str,
        /// Loader error.
        #[source]
        source: libloading::Error,
    },
}

/// The three entry points of the engine.
#[derive(Debug, Clone, Copy)]
pub struct EngineApi {
    /// Coordinate-based solve.
    pub solve_cvrp: SolveCvrpFn,
    /// Matrix-based solve.
    pub solve_cvrp_dist_mtx: SolveCvrpDistMtxFn,
    /// Release a returned solution.
    pub delete_solution: DeleteSolutionFn,
}

/// Resolved engine entry points together with the library that backs them.
///
/// The library stays loaded for as long as the engine exists, so the function
/// pointers in [`NativeEngine::api`] remain valid.
#[derive(Debug)]
pub struct NativeEngine {
    api: EngineApi,
    library: Option<Library>,
}

impl NativeEngine {
    /// Open the library at `path` and resolve its entry points.
    ///
    /// # Errors
    /// Returns [`LoadError::Open`] when the loader rejects the file and
    /// [`LoadError::MissingSymbol`] when an entry point is absent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let library_path = path.as_ref();
        debug!("loading HGS engine from {}", library_path.display());
        // SAFETY: opening runs the library's static initialisers. The HGS
        // engine only initialises C++ statics.
        let library = unsafe { Library::new(library_path) }.map_err(|source| LoadError::Open {
            path: library_path.to_path_buf(),
            source,
        })?;
        // SAFETY: the symbol types are the engine's documented signatures.
        let api = unsafe {
            EngineApi {
                solve_cvrp: resolve(&library, library_path, SOLVE_CVRP)?,
                solve_cvrp_dist_mtx: resolve(&library, library_path, SOLVE_CVRP_DIST_MTX)?,
                delete_solution: resolve(&library, library_path, DELETE_SOLUTION)?,
            }
        };
        Ok(Self {
            api,
            library: Some(library),
        })
    }

    /// Load the library named by [`LIBRARY_PATH_ENV`], falling back to the
    /// platform file name (`libhgscvrp.so`, `libhgscvrp.dylib`,
    /// `hgscvrp.dll`) on the loader search path.
    ///
    /// # Errors
    /// As [`NativeEngine::load`].
    pub fn load_default() -> Result<Self, LoadError> {
        Self::load(default_library_path())
    }

    /// Wrap entry points that are already present in the process.
    ///
    /// # Safety
    /// Every function in `api` must follow the engine's ABI contract, and the
    /// code behind them must outlive the returned engine.
    #[must_use]
    pub const unsafe fn from_api(api: EngineApi) -> Self {
        Self { api, library: None }
    }

    /// Resolved entry points.
    #[must_use]
    pub const fn api(&self) -> &EngineApi {
        &self.api
    }

    /// Whether the entry points come from a dynamically loaded library.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        self.library.is_some()
    }
}

/// Path used by [`NativeEngine::load_default`].
#[must_use]
pub fn default_library_path() -> PathBuf {
    std::env::var_os(LIBRARY_PATH_ENV)
        .filter(|value| !value.is_empty())
        .map_or_else(
            || PathBuf::from(libloading::library_filename(LIBRARY_NAME)),
            PathBuf::from,
        )
}

unsafe fn resolve<T: Copy>(
    library: &Library,
    path: &Path,
    symbol: &'static str,
) -> Result<T, LoadError> {
    // SAFETY: the caller guarantees `T` matches the exported symbol.
    let resolved = unsafe { library.get::<T>(symbol.as_bytes()) }.map_err(|source| {
        LoadError::MissingSymbol {
            path: path.to_path_buf(),
            symbol,
            source,
        }
    })?;
    Ok(*resolved)
}
