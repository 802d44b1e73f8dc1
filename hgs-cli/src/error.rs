//! Error types emitted by the `hgs` CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use hgs_core::SolveError;
use hgs_native::LoadError;
use thiserror::Error;

/// Errors emitted by the `hgs` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The time limit is negative or not finite.
    #[error("time limit must be a non-negative number of seconds, got {seconds}")]
    InvalidTimeLimit {
        /// Value supplied.
        seconds: f64,
    },
    /// Opening the instance file failed.
    #[error("failed to open instance at {path:?}: {source}")]
    OpenInstance {
        /// Instance path.
        path: Utf8PathBuf,
        /// I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Instance JSON could not be decoded.
    #[error("failed to parse instance JSON at {path:?}: {source}")]
    ParseInstance {
        /// Instance path.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The engine library could not be loaded.
    #[error(transparent)]
    LoadEngine(#[from] LoadError),
    /// The solver rejected the instance or the engine failed.
    #[error("solver failed: {source}")]
    Solve {
        /// Solver error.
        source: SolveError,
    },
    /// Serializing the solution failed.
    #[error("failed to serialize solution: {0}")]
    SerializeSolution(#[source] serde_json::Error),
    /// Writing the solution failed.
    #[error("failed to write solution: {0}")]
    WriteSolution(#[source] std::io::Error),
}
