//! Marshaling of validated instances and the foreign call itself.

use std::ffi::{c_double, c_int};
use std::ptr;

use hgs_core::{
    EngineError, EntryPoint, ProblemInstance, SolveError, UNBOUNDED_DURATION, ValidationError,
};
use log::debug;

use crate::decode::NativeSolution;
use crate::ffi::{CAlgorithmParameters, CSolution, flag};
use crate::library::EngineApi;

/// Contiguous buffers and scalars for one engine call.
///
/// The buffers are owned here and outlive the call that borrows them.
#[derive(Debug)]
struct CallArguments {
    node_count: c_int,
    x: Vec<c_double>,
    y: Vec<c_double>,
    service_times: Vec<c_double>,
    demands: Vec<c_double>,
    distance_matrix: Option<Vec<c_double>>,
    capacity: c_double,
    duration_limit: c_double,
    duration_constrained: bool,
    rounding_integer: bool,
    max_vehicles: c_int,
}

impl CallArguments {
    fn marshal(instance: &ProblemInstance) -> Result<Self, ValidationError> {
        let nodes = instance.node_count();
        let node_count = c_int::try_from(nodes).map_err(|_| ValidationError::TooManyNodes {
            nodes,
            max: usize::try_from(c_int::MAX).unwrap_or(usize::MAX),
        })?;
        let vehicles = instance.max_vehicles();
        let max_vehicles =
            c_int::try_from(vehicles).map_err(|_| ValidationError::InvalidVehicleCount {
                vehicles,
                max: c_int::MAX.unsigned_abs(),
            })?;
        let (x, y) = instance
            .coordinates()
            .iter()
            .map(|coord| (coord.x, coord.y))
            .unzip();
        Ok(Self {
            node_count,
            x,
            y,
            service_times: instance.service_times().to_vec(),
            demands: instance.demands().to_vec(),
            distance_matrix: instance
                .distance_matrix()
                .map(|matrix| matrix.values().to_vec()),
            capacity: instance.vehicle_capacity(),
            duration_limit: instance.duration_limit().unwrap_or(UNBOUNDED_DURATION),
            duration_constrained: instance.duration_limit().is_some(),
            rounding_integer: instance.rounding().is_integer(),
            max_vehicles,
        })
    }

    fn call(
        &self,
        api: &EngineApi,
        parameters: &CAlgorithmParameters,
        verbose: bool,
    ) -> *mut CSolution {
        let params = ptr::from_ref(parameters);
        match &self.distance_matrix {
            // SAFETY: every buffer holds `node_count` entries (`node_count²`
            // for the matrix) and lives until this function returns.
            Some(matrix) => unsafe {
                (api.solve_cvrp_dist_mtx)(
                    self.node_count,
                    self.x.as_ptr(),
                    self.y.as_ptr(),
                    matrix.as_ptr(),
                    self.service_times.as_ptr(),
                    self.demands.as_ptr(),
                    self.capacity,
                    self.duration_limit,
                    flag(self.duration_constrained),
                    self.max_vehicles,
                    params,
                    flag(verbose),
                )
            },
            // SAFETY: as above, without the matrix.
            None => unsafe {
                (api.solve_cvrp)(
                    self.node_count,
                    self.x.as_ptr(),
                    self.y.as_ptr(),
                    self.service_times.as_ptr(),
                    self.demands.as_ptr(),
                    self.capacity,
                    self.duration_limit,
                    flag(self.rounding_integer),
                    flag(self.duration_constrained),
                    self.max_vehicles,
                    params,
                    flag(verbose),
                )
            },
        }
    }
}

/// Marshal `instance`, call the matching entry point and take ownership of
/// the result.
pub(crate) fn dispatch(
    api: &EngineApi,
    instance: &ProblemInstance,
    parameters: &CAlgorithmParameters,
    verbose: bool,
) -> Result<NativeSolution, SolveError> {
    let arguments = CallArguments::marshal(instance)?;
    let entry_point = EntryPoint::for_instance(instance);
    debug!(
        "calling {entry_point} with {} nodes",
        instance.node_count()
    );
    let raw = arguments.call(api, parameters, verbose);
    // SAFETY: `raw` comes straight from the engine behind `api`.
    unsafe { NativeSolution::from_raw(raw, api.delete_solution) }
        .ok_or(EngineError::NullSolution { entry_point })
        .map_err(SolveError::from)
}
