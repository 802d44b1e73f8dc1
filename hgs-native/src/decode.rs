//! Ownership and decoding of engine-allocated solutions.

use std::ffi::c_int;
use std::ptr::NonNull;
use std::slice;

use hgs_core::{EngineError, Solution};
use log::debug;

use crate::ffi::{CSolution, CSolutionRoute, DeleteSolutionFn};

/// Owned handle over a solution returned by the engine.
///
/// Dropping the handle hands the memory back to the engine's
/// `delete_solution` exactly once.
pub(crate) struct NativeSolution {
    raw: NonNull<CSolution>,
    delete: DeleteSolutionFn,
}

impl NativeSolution {
    /// Take ownership of `raw`; `None` when the engine returned null.
    ///
    /// # Safety
    /// A non-null `raw` must point to a solution produced by the engine whose
    /// `delete_solution` is `delete`, and nothing else may release it.
    pub(crate) unsafe fn from_raw(raw: *mut CSolution, delete: DeleteSolutionFn) -> Option<Self> {
        NonNull::new(raw).map(|raw_solution| Self {
            raw: raw_solution,
            delete,
        })
    }

    /// Copy the solution into caller-owned memory.
    pub(crate) fn decode(&self) -> Result<Solution, EngineError> {
        // SAFETY: `raw` is non-null and stays valid until `drop`.
        let native = unsafe { self.raw.as_ref() };
        let route_count = count(native.n_routes, "route count")?;
        // SAFETY: the engine allocates `n_routes` entries behind `routes`.
        let native_routes = unsafe { borrow_array(native.routes, route_count, "route array")? };
        let routes = native_routes
            .iter()
            .map(decode_route)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "decoded solution: cost {} over {} routes in {}s",
            native.cost,
            routes.len(),
            native.time
        );
        Ok(Solution::new(native.cost, native.time, routes))
    }
}

impl Drop for NativeSolution {
    fn drop(&mut self) {
        // SAFETY: ownership was transferred in `from_raw` and this is the only
        // release of the pointer.
        unsafe { (self.delete)(self.raw.as_ptr()) }
    }
}

fn decode_route(route: &CSolutionRoute) -> Result<Vec<usize>, EngineError> {
    let length = count(route.length, "route length")?;
    // SAFETY: the engine allocates `length` node indices behind `path`.
    let path = unsafe { borrow_array(route.path, length, "route path")? };
    path.iter()
        .map(|node| {
            usize::try_from(*node).map_err(|_| malformed(format!("negative node index {node}")))
        })
        .collect()
}

fn count(value: c_int, what: &str) -> Result<usize, EngineError> {
    usize::try_from(value).map_err(|_| malformed(format!("negative {what} {value}")))
}

/// Borrow `len` elements at `ptr`, treating a null pointer as empty only when
/// `len` is zero.
///
/// # Safety
/// A non-null `ptr` must address `len` initialised elements that outlive the
/// returned slice.
unsafe fn borrow_array<'a, T>(ptr: *const T, len: usize, what: &str) -> Result<&'a [T], EngineError> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(malformed(format!("null {what} with {len} entries")));
    }
    // SAFETY: upheld by the caller.
    Ok(unsafe { slice::from_raw_parts(ptr, len) })
}

const fn malformed(reason: String) -> EngineError {
    EngineError::MalformedSolution { reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::ptr;

    thread_local! {
        static RELEASED: Cell<usize> = const { Cell::new(0) };
    }

    unsafe extern "C" fn count_release(_solution: *mut CSolution) {
        RELEASED.with(|released| released.set(released.get() + 1));
    }

    fn decode_and_release(solution: &mut CSolution) -> Result<Solution, EngineError> {
        RELEASED.with(|released| released.set(0));
        let outcome = {
            // SAFETY: `count_release` does not free; the struct lives on the stack.
            let handle = unsafe { NativeSolution::from_raw(ptr::from_mut(solution), count_release) }
                .expect("non-null");
            handle.decode()
        };
        assert_eq!(RELEASED.with(Cell::get), 1);
        outcome
    }

    #[rstest]
    fn copies_routes_in_order() {
        let mut first = [3, 1];
        let mut second = [2];
        let mut routes = [
            CSolutionRoute {
                length: 2,
                path: first.as_mut_ptr(),
            },
            CSolutionRoute {
                length: 1,
                path: second.as_mut_ptr(),
            },
        ];
        let mut solution = CSolution {
            cost: 12.0,
            time: 0.25,
            n_routes: 2,
            routes: routes.as_mut_ptr(),
        };
        let decoded = decode_and_release(&mut solution).expect("well-formed solution");
        assert_eq!(decoded, Solution::new(12.0, 0.25, vec![vec![3, 1], vec![2]]));
    }

    #[rstest]
    fn empty_solution_may_have_null_routes() {
        let mut solution = CSolution {
            cost: 0.0,
            time: 0.0,
            n_routes: 0,
            routes: ptr::null_mut(),
        };
        let decoded = decode_and_release(&mut solution).expect("empty is well-formed");
        assert!(decoded.routes.is_empty());
    }

    #[rstest]
    fn negative_route_count_is_malformed_and_released() {
        let mut solution = CSolution {
            cost: 0.0,
            time: 0.0,
            n_routes: -1,
            routes: ptr::null_mut(),
        };
        let err = decode_and_release(&mut solution).expect_err("negative count");
        assert!(matches!(err, EngineError::MalformedSolution { .. }));
    }

    #[rstest]
    fn null_route_array_with_entries_is_malformed() {
        let mut solution = CSolution {
            cost: 0.0,
            time: 0.0,
            n_routes: 2,
            routes: ptr::null_mut(),
        };
        let err = decode_and_release(&mut solution).expect_err("null array");
        assert_eq!(
            err,
            EngineError::MalformedSolution {
                reason: String::from("null route array with 2 entries"),
            }
        );
    }

    #[rstest]
    fn negative_node_index_is_malformed() {
        let mut path = [1, -4];
        let mut routes = [CSolutionRoute {
            length: 2,
            path: path.as_mut_ptr(),
        }];
        let mut solution = CSolution {
            cost: 1.0,
            time: 0.0,
            n_routes: 1,
            routes: routes.as_mut_ptr(),
        };
        let err = decode_and_release(&mut solution).expect_err("negative node");
        assert_eq!(
            err,
            EngineError::MalformedSolution {
                reason: String::from("negative node index -4"),
            }
        );
    }
}
