//! In-process stand-ins for the native engine.
//!
//! [`reference_engine`] implements the three entry points in Rust. Each call
//! is recorded on the calling thread, and the returned solution is a single
//! route visiting every client in index order. Its cost is taken from the
//! matrix, or computed as the Euclidean tour length (rounded per edge when
//! integer rounding is requested). [`null_engine`] and [`malformed_engine`]
//! exercise the failure paths.

use std::cell::{Cell, RefCell};
use std::ffi::{c_char, c_double, c_int};
use std::ptr;
use std::slice;

use hgs_core::EntryPoint;

use crate::ffi::{CAlgorithmParameters, CSolution, CSolutionRoute};
use crate::library::{EngineApi, NativeEngine};

/// Arguments received by a stand-in entry point, copied out of the call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Entry point that was called.
    pub entry_point: EntryPoint,
    /// Node count argument.
    pub node_count: c_int,
    /// X coordinate buffer.
    pub x: Vec<f64>,
    /// Y coordinate buffer.
    pub y: Vec<f64>,
    /// Row-major matrix buffer, matrix entry point only.
    pub distance_matrix: Option<Vec<f64>>,
    /// Service time buffer.
    pub service_times: Vec<f64>,
    /// Demand buffer.
    pub demands: Vec<f64>,
    /// Vehicle capacity.
    pub capacity: f64,
    /// Duration limit, `UNBOUNDED_DURATION` when unconstrained.
    pub duration_limit: f64,
    /// Duration constraint flag.
    pub duration_constrained: bool,
    /// Rounding flag, coordinate entry point only.
    pub rounding_integer: Option<bool>,
    /// Fleet bound.
    pub max_vehicles: c_int,
    /// Parameter block.
    pub parameters: CAlgorithmParameters,
    /// Verbosity flag.
    pub verbose: bool,
}

thread_local! {
    static CALLS: RefCell<Vec<RecordedCall>> = const { RefCell::new(Vec::new()) };
    static RELEASED: Cell<usize> = const { Cell::new(0) };
}

/// Clear the calls and releases recorded on this thread.
pub fn reset() {
    CALLS.with(|calls| calls.borrow_mut().clear());
    RELEASED.with(|released| released.set(0));
}

/// Drain the calls recorded on this thread.
#[must_use]
pub fn take_calls() -> Vec<RecordedCall> {
    CALLS.with(|calls| calls.borrow_mut().drain(..).collect())
}

/// Number of `delete_solution` calls made on this thread.
#[must_use]
pub fn released_solutions() -> usize {
    RELEASED.with(Cell::get)
}

/// Engine that records calls and returns one in-order route.
#[must_use]
pub fn reference_engine() -> NativeEngine {
    engine(Behaviour::Reference)
}

/// Engine whose entry points always return null.
#[must_use]
pub fn null_engine() -> NativeEngine {
    engine(Behaviour::Null)
}

/// Engine whose solutions contain a negative node index.
#[must_use]
pub fn malformed_engine() -> NativeEngine {
    engine(Behaviour::Malformed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behaviour {
    Reference,
    Null,
    Malformed,
}

fn engine(behaviour: Behaviour) -> NativeEngine {
    let api = match behaviour {
        Behaviour::Reference => EngineApi {
            solve_cvrp: reference_solve_cvrp,
            solve_cvrp_dist_mtx: reference_solve_cvrp_dist_mtx,
            delete_solution: release_solution,
        },
        Behaviour::Null => EngineApi {
            solve_cvrp: null_solve_cvrp,
            solve_cvrp_dist_mtx: null_solve_cvrp_dist_mtx,
            delete_solution: release_solution,
        },
        Behaviour::Malformed => EngineApi {
            solve_cvrp: malformed_solve_cvrp,
            solve_cvrp_dist_mtx: malformed_solve_cvrp_dist_mtx,
            delete_solution: release_solution,
        },
    };
    // SAFETY: the stand-ins follow the engine ABI and are part of this binary.
    unsafe { NativeEngine::from_api(api) }
}

/// Raw arguments shared by both entry points.
struct RawCall {
    n: c_int,
    x: *const c_double,
    y: *const c_double,
    dist_mtx: Option<*const c_double>,
    serv_time: *const c_double,
    dem: *const c_double,
    vehicle_capacity: c_double,
    duration_limit: c_double,
    is_rounding_integer: Option<c_char>,
    is_duration_constraint: c_char,
    max_nb_vehicles: c_int,
    ap: *const CAlgorithmParameters,
    verbose: c_char,
}

impl RawCall {
    /// Copy the call out of foreign memory.
    ///
    /// # Safety
    /// Pointers must satisfy the engine ABI for `n` nodes.
    unsafe fn record(&self) -> Option<RecordedCall> {
        let nodes = usize::try_from(self.n).ok()?;
        let cells = nodes.checked_mul(nodes)?;
        if self.ap.is_null() {
            return None;
        }
        // SAFETY: upheld by the caller.
        let call = unsafe {
            RecordedCall {
                entry_point: if self.dist_mtx.is_some() {
                    EntryPoint::DistanceMatrix
                } else {
                    EntryPoint::Coordinates
                },
                node_count: self.n,
                x: copy(self.x, nodes),
                y: copy(self.y, nodes),
                distance_matrix: self.dist_mtx.map(|matrix| copy(matrix, cells)),
                service_times: copy(self.serv_time, nodes),
                demands: copy(self.dem, nodes),
                capacity: self.vehicle_capacity,
                duration_limit: self.duration_limit,
                duration_constrained: self.is_duration_constraint != 0,
                rounding_integer: self.is_rounding_integer.map(|rounding| rounding != 0),
                max_vehicles: self.max_nb_vehicles,
                parameters: *self.ap,
                verbose: self.verbose != 0,
            }
        };
        CALLS.with(|calls| calls.borrow_mut().push(call.clone()));
        Some(call)
    }

    unsafe fn respond(&self, behaviour: Behaviour) -> *mut CSolution {
        // SAFETY: upheld by the caller.
        let Some(call) = (unsafe { self.record() }) else {
            return ptr::null_mut();
        };
        match behaviour {
            Behaviour::Null => ptr::null_mut(),
            Behaviour::Reference => allocate(tour_cost(&call), in_order_route(call.node_count)),
            Behaviour::Malformed => allocate(0.0, vec![1, -1]),
        }
    }
}

unsafe fn copy(values: *const c_double, len: usize) -> Vec<f64> {
    if values.is_null() || len == 0 {
        return Vec::new();
    }
    // SAFETY: the caller guarantees `len` readable values.
    unsafe { slice::from_raw_parts(values, len) }.to_vec()
}

fn in_order_route(node_count: c_int) -> Vec<c_int> {
    (1..node_count).collect()
}

/// Closed tour `0 → 1 → … → n-1 → 0`.
fn tour_cost(call: &RecordedCall) -> f64 {
    let nodes = call.demands.len();
    if nodes < 2 {
        return 0.0;
    }
    (0..nodes)
        .zip((1..nodes).chain(std::iter::once(0)))
        .map(|(from, to)| edge_cost(call, from, to))
        .sum()
}

#[expect(
    clippy::float_arithmetic,
    reason = "Euclidean distance needs floating point arithmetic"
)]
fn edge_cost(call: &RecordedCall, from: usize, to: usize) -> f64 {
    if let Some(matrix) = &call.distance_matrix {
        let nodes = call.demands.len();
        return from
            .checked_mul(nodes)
            .and_then(|row| row.checked_add(to))
            .and_then(|index| matrix.get(index))
            .copied()
            .unwrap_or_default();
    }
    let point = |index: usize| {
        (
            call.x.get(index).copied().unwrap_or_default(),
            call.y.get(index).copied().unwrap_or_default(),
        )
    };
    let (from_x, from_y) = point(from);
    let (to_x, to_y) = point(to);
    let distance = (from_x - to_x).hypot(from_y - to_y);
    if call.rounding_integer.unwrap_or(false) {
        distance.round()
    } else {
        distance
    }
}

fn allocate(cost: f64, path: Vec<c_int>) -> *mut CSolution {
    let routes = if path.is_empty() {
        Vec::new()
    } else {
        let length = c_int::try_from(path.len()).unwrap_or(c_int::MAX);
        let path_ptr = Box::into_raw(path.into_boxed_slice()).cast::<c_int>();
        vec![CSolutionRoute {
            length,
            path: path_ptr,
        }]
    };
    let n_routes = c_int::try_from(routes.len()).unwrap_or(c_int::MAX);
    let routes_ptr = if routes.is_empty() {
        ptr::null_mut()
    } else {
        Box::into_raw(routes.into_boxed_slice()).cast::<CSolutionRoute>()
    };
    Box::into_raw(Box::new(CSolution {
        cost,
        time: 0.0,
        n_routes,
        routes: routes_ptr,
    }))
}

unsafe extern "C" fn release_solution(solution: *mut CSolution) {
    RELEASED.with(|released| released.set(released.get().saturating_add(1)));
    if solution.is_null() {
        return;
    }
    // SAFETY: every solution handed out was built by `allocate`.
    let owned = unsafe { Box::from_raw(solution) };
    let route_count = usize::try_from(owned.n_routes).unwrap_or(0);
    if owned.routes.is_null() || route_count == 0 {
        return;
    }
    // SAFETY: `allocate` boxed exactly `route_count` routes.
    let routes = unsafe {
        Box::from_raw(ptr::slice_from_raw_parts_mut(owned.routes, route_count))
    };
    for route in &routes {
        let length = usize::try_from(route.length).unwrap_or(0);
        if !route.path.is_null() && length > 0 {
            // SAFETY: `allocate` boxed exactly `length` nodes.
            drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(route.path, length)) });
        }
    }
}

macro_rules! stand_in_entry_points {
    ($behaviour:expr, $coordinates:ident, $matrix:ident) => {
        #[expect(clippy::too_many_arguments, reason = "mirrors the engine ABI")]
        unsafe extern "C" fn $coordinates(
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
        ) -> *mut CSolution {
            let call = RawCall {
                n,
                x,
                y,
                dist_mtx: None,
                serv_time,
                dem,
                vehicle_capacity,
                duration_limit,
                is_rounding_integer: Some(is_rounding_integer),
                is_duration_constraint,
                max_nb_vehicles,
                ap,
                verbose,
            };
            // SAFETY: callers uphold the engine ABI.
            unsafe { call.respond($behaviour) }
        }

        #[expect(clippy::too_many_arguments, reason = "mirrors the engine ABI")]
        unsafe extern "C" fn $matrix(
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
        ) -> *mut CSolution {
            let call = RawCall {
                n,
                x,
                y,
                dist_mtx: Some(dist_mtx),
                serv_time,
                dem,
                vehicle_capacity,
                duration_limit,
                is_rounding_integer: None,
                is_duration_constraint,
                max_nb_vehicles,
                ap,
                verbose,
            };
            // SAFETY: callers uphold the engine ABI.
            unsafe { call.respond($behaviour) }
        }
    };
}

stand_in_entry_points!(
    Behaviour::Reference,
    reference_solve_cvrp,
    reference_solve_cvrp_dist_mtx
);
stand_in_entry_points!(Behaviour::Null, null_solve_cvrp, null_solve_cvrp_dist_mtx);
stand_in_entry_points!(
    Behaviour::Malformed,
    malformed_solve_cvrp,
    malformed_solve_cvrp_dist_mtx
);
