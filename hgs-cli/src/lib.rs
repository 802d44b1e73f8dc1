//! Command-line interface for solving routing instances with HGS-CVRP.
//!
//! `hgs cvrp <instance.json>` validates and solves a capacitated vehicle
//! routing instance; `hgs tsp <instance.json>` solves a travelling salesman
//! instance. Options are layered from CLI flags, `HGS_CMDS_SOLVE_*`
//! environment variables and configuration files, and the solution is printed
//! as JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod solve;

pub use error::CliError;
pub use solve::ProblemKind;

const ARG_INSTANCE: &str = "instance";
const ARG_LIBRARY: &str = "library";
const ARG_TIME_LIMIT: &str = "time-limit";
const ARG_SEED: &str = "seed";
const ARG_ITERATIONS: &str = "iterations";
const ARG_SWAP_STAR: &str = "swap-star";
const ARG_VERBOSE: &str = "verbose";
const ENV_INSTANCE: &str = "HGS_CMDS_SOLVE_INSTANCE";

/// Run the `hgs` CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the instance file, the
/// engine or output fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let (kind, args) = cli.command.into_parts();
    solve::run_solve(kind, args)
}

#[derive(Debug, Parser)]
#[command(
    name = "hgs",
    about = "Solve vehicle routing instances with the HGS-CVRP engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a capacitated vehicle routing instance.
    Cvrp(solve::SolveArgs),
    /// Solve a travelling salesman instance.
    Tsp(solve::SolveArgs),
}

impl Command {
    fn into_parts(self) -> (ProblemKind, solve::SolveArgs) {
        match self {
            Self::Cvrp(args) => (ProblemKind::Cvrp, args),
            Self::Tsp(args) => (ProblemKind::Tsp, args),
        }
    }
}

#[cfg(test)]
mod tests;
