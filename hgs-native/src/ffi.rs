//! Raw declarations for the `libhgscvrp` C interface.
//!
//! Layouts are bit-exact with the engine's `C_Interface.h`; see the layout
//! tests at the bottom of this module before changing any field.

use std::ffi::{c_char, c_double, c_int};

/// Search parameters as laid out by the engine.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CAlgorithmParameters {
    /// Granular search parameter.
    pub nb_granular: c_int,
    /// Minimum population size.
    pub mu: c_int,
    /// Generation size.
    pub lambda: c_int,
    /// Number of elite individuals.
    pub nb_elite: c_int,
    /// Number of close individuals for diversity.
    pub nb_close: c_int,
    /// Target proportion of feasible individuals.
    pub target_feasible: c_double,
    /// Random seed.
    pub seed: c_int,
    /// Iterations without improvement before termination.
    pub nb_iter: c_int,
    /// CPU time budget in seconds.
    pub time_limit: c_double,
    /// SWAP* flag, 0 or 1.
    pub use_swap_star: c_char,
}

/// One route of an engine solution.
#[repr(C)]
#[derive(Debug)]
pub struct CSolutionRoute {
    /// Number of entries in `path`.
    pub length: c_int,
    /// Visited nodes, depot excluded.
    pub path: *mut c_int,
}

/// Engine-allocated solution; released with `delete_solution`.
#[repr(C)]
#[derive(Debug)]
pub struct CSolution {
    /// Total cost.
    pub cost: c_double,
    /// Search time in seconds.
    pub time: c_double,
    /// Number of entries in `routes`.
    pub n_routes: c_int,
    /// Route array.
    pub routes: *mut CSolutionRoute,
}

/// `solve_cvrp`: coordinate-based entry point.
pub type SolveCvrpFn = unsafe extern "C" fn(
    n: c_int,
    x: *const c_double,
    y: *const c_double,
    serv_time: *const c_double,
    dem: *const c_double,
    vehicle_capacity: c_double,
    duration_limit: c_double,
    is_rounding_integer: c_char,
    is_duration_constraint: c_char,
    max_nb_vehicles: c_int,
    ap: *const CAlgorithmParameters,
    verbose: c_char,
) -> *mut CSolution;

/// `solve_cvrp_dist_mtx`: distance-matrix entry point.
pub type SolveCvrpDistMtxFn = unsafe extern "C" fn(
    n: c_int,
    x: *const c_double,
    y: *const c_double,
    dist_mtx: *const c_double,
    serv_time: *const c_double,
    dem: *const c_double,
    vehicle_capacity: c_double,
    duration_limit: c_double,
    is_duration_constraint: c_char,
    max_nb_vehicles: c_int,
    ap: *const CAlgorithmParameters,
    verbose: c_char,
) -> *mut CSolution;

/// `delete_solution`: releases a solution returned by either entry point.
pub type DeleteSolutionFn = unsafe extern "C" fn(solution: *mut CSolution);

/// Encode a flag as the engine's single-byte boolean.
#[must_use]
pub const fn flag(value: bool) -> c_char {
    if value { 1 } else { 0 }
}
