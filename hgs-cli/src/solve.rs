//! Solve command implementation for the `hgs` CLI.

use std::io::{BufReader, Write};
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use hgs_core::{AlgorithmConfig, InstanceData, Solution, Solver, TspData};
use hgs_native::HgsSolver;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_INSTANCE, ARG_ITERATIONS, ARG_LIBRARY, ARG_SEED, ARG_SWAP_STAR, ARG_TIME_LIMIT,
    ARG_VERBOSE, CliError, ENV_INSTANCE,
};

/// Shape of the instance file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    /// A CVRP record with demands and capacity.
    Cvrp,
    /// A TSP record with distances only.
    Tsp,
}

/// CLI arguments shared by the `cvrp` and `tsp` subcommands.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "solve",
    long_about = "Solve an instance stored as JSON. The engine library is \
                 loaded from --library, HGS_LIBRARY_PATH or the platform's \
                 library search path.",
    about = "Solve a routing instance"
)]
#[ortho_config(prefix = "HGS")]
pub(crate) struct SolveArgs {
    /// Path to a JSON instance file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) instance: Option<Utf8PathBuf>,
    /// Path to the HGS-CVRP shared library.
    #[arg(long = ARG_LIBRARY, value_name = "path")]
    #[serde(default)]
    pub(crate) library: Option<Utf8PathBuf>,
    /// Search time budget in seconds.
    #[arg(long = ARG_TIME_LIMIT, value_name = "secs")]
    #[serde(default)]
    pub(crate) time_limit: Option<f64>,
    /// Random seed.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<i32>,
    /// Iterations without improvement before the search stops.
    #[arg(long = ARG_ITERATIONS, value_name = "n")]
    #[serde(default)]
    pub(crate) iterations: Option<i32>,
    /// Explore the SWAP* neighbourhood.
    #[arg(long = ARG_SWAP_STAR, value_name = "bool")]
    #[serde(default)]
    pub(crate) swap_star: Option<bool>,
    /// Let the engine print its search log.
    #[arg(long = ARG_VERBOSE, num_args = 0..=1, default_missing_value = "true", value_name = "bool")]
    #[serde(default)]
    pub(crate) verbose: Option<bool>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved solve configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON instance file.
    pub(crate) instance: Utf8PathBuf,
    /// Explicit engine library, if any.
    pub(crate) library: Option<Utf8PathBuf>,
    /// Search parameters.
    pub(crate) algorithm: AlgorithmConfig,
    /// Engine verbosity.
    pub(crate) verbose: bool,
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let instance = args.instance.ok_or(CliError::MissingArgument {
            field: ARG_INSTANCE,
            env: ENV_INSTANCE,
        })?;

        let mut algorithm = AlgorithmConfig::default();
        if let Some(seconds) = args.time_limit {
            let limit = Duration::try_from_secs_f64(seconds)
                .map_err(|_| CliError::InvalidTimeLimit { seconds })?;
            algorithm = algorithm.with_time_limit(limit);
        }
        if let Some(seed) = args.seed {
            algorithm = algorithm.with_seed(seed);
        }
        if let Some(iterations) = args.iterations {
            algorithm = algorithm.with_iterations(iterations);
        }
        if let Some(enabled) = args.swap_star {
            algorithm = algorithm.with_swap_star(enabled);
        }

        Ok(Self {
            instance,
            library: args.library,
            algorithm,
            verbose: args.verbose.unwrap_or(false),
        })
    }
}

/// Builds a solver for the current invocation.
pub(crate) trait SolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError>;
}

pub(crate) struct NativeSolverBuilder;

impl SolverBuilder for NativeSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        let solver = match &config.library {
            Some(path) => HgsSolver::load(path)?,
            None => HgsSolver::load_default()?,
        };
        Ok(Box::new(solver))
    }
}

pub(crate) fn run_solve(kind: ProblemKind, args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_solve_with(kind, args, &NativeSolverBuilder, &mut stdout)
}

pub(crate) fn run_solve_with(
    kind: ProblemKind,
    args: SolveArgs,
    builder: &dyn SolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let solution = execute_solve(kind, args, builder)?;
    write_solution(writer, &solution)
}

fn execute_solve(
    kind: ProblemKind,
    args: SolveArgs,
    builder: &dyn SolverBuilder,
) -> Result<Solution, CliError> {
    let config = args.into_config()?;
    debug!("solving {kind:?} instance from {}", config.instance);
    let outcome = match kind {
        ProblemKind::Cvrp => {
            let data: InstanceData = load_json(&config.instance)?;
            let solver = builder.build(&config)?;
            solver.solve_cvrp_data(data, &config.algorithm, config.verbose)
        }
        ProblemKind::Tsp => {
            let data: TspData = load_json(&config.instance)?;
            let solver = builder.build(&config)?;
            solver.solve_tsp(&data, &config.algorithm, config.verbose)
        }
    };
    outcome.map_err(|source| CliError::Solve { source })
}

/// Loads a JSON-encoded instance from disk.
pub(crate) fn load_json<T>(path: &Utf8Path) -> Result<T, CliError>
where
    T: for<'de> Deserialize<'de>,
{
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenInstance {
            path: path.to_path_buf(),
            source,
        }
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInstance {
        path: path.to_path_buf(),
        source,
    })
}

fn write_solution(writer: &mut dyn Write, solution: &Solution) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(solution).map_err(CliError::SerializeSolution)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteSolution)?;
    writer.write_all(b"\n").map_err(CliError::WriteSolution)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
