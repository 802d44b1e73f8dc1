//! Behavioural tests for `HgsSolver` using rstest-bdd.

use std::cell::RefCell;

use hgs_core::test_support::{small_coordinate_instance, tour_instance};
use hgs_core::{
    AlgorithmConfig, EngineError, EntryPoint, InstanceData, Solution, SolveError, Solver, TspData,
};
use hgs_native::HgsSolver;
use hgs_native::test_support::{
    malformed_engine, null_engine, reference_engine, released_solutions, reset, take_calls,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct SolverWorld {
    solver: RefCell<Option<HgsSolver>>,
    record: RefCell<Option<InstanceData>>,
    tour: RefCell<Option<TspData>>,
    outcome: RefCell<Option<Result<Solution, SolveError>>>,
}

impl SolverWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<Solution, SolveError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn solve(&self, run: impl FnOnce(&HgsSolver) -> Result<Solution, SolveError>) {
        let outcome = run(self
            .solver
            .borrow()
            .as_ref()
            .expect("an engine should be chosen"));
        self.outcome.replace(Some(outcome));
    }
}

#[fixture]
fn world() -> SolverWorld {
    reset();
    SolverWorld::default()
}

#[given("the reference engine")]
fn given_reference_engine(world: &SolverWorld) {
    world.solver.replace(Some(HgsSolver::new(reference_engine())));
}

#[given("an engine that returns no solution")]
fn given_null_engine(world: &SolverWorld) {
    world.solver.replace(Some(HgsSolver::new(null_engine())));
}

#[given("an engine that returns malformed solutions")]
fn given_malformed_engine(world: &SolverWorld) {
    world.solver.replace(Some(HgsSolver::new(malformed_engine())));
}

#[given("the small coordinate instance")]
fn given_small_instance(world: &SolverWorld) {
    world.record.replace(Some(small_coordinate_instance()));
}

#[given("a record with a non-zero depot")]
fn given_bad_depot(world: &SolverWorld) {
    world
        .record
        .replace(Some(small_coordinate_instance().with_depot(2)));
}

#[given("the reference tour")]
fn given_reference_tour(world: &SolverWorld) {
    world.tour.replace(Some(tour_instance()));
}

#[when("the instance is solved")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn when_instance_solved(world: &SolverWorld) {
    let data = world.record.borrow().clone().expect("a record should be prepared");
    let instance = data.build().expect("record should be valid");
    world.solve(|solver| solver.solve_cvrp(&instance, &AlgorithmConfig::default(), false));
}

#[when("the record is solved")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn when_record_solved(world: &SolverWorld) {
    let data = world.record.borrow().clone().expect("a record should be prepared");
    world.solve(|solver| solver.solve_cvrp_data(data, &AlgorithmConfig::default(), false));
}

#[when("the tour is solved")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn when_tour_solved(world: &SolverWorld) {
    let tour = world.tour.borrow().clone().expect("a tour should be prepared");
    world.solve(|solver| solver.solve_tsp(&tour, &AlgorithmConfig::default(), false));
}

#[then("the solution visits every client once")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_every_client_once(world: &SolverWorld) {
    let solution = world.expect_outcome().expect("expected solve success");
    let mut visited: Vec<usize> = solution.visited_nodes().collect();
    visited.sort_unstable();
    assert_eq!(visited, vec![1, 2, 3, 4]);
}

#[then("the solution has {count} route")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_route_count(world: &SolverWorld, count: usize) {
    let solution = world.expect_outcome().expect("expected solve success");
    assert_eq!(solution.route_count(), count);
}

#[then("the engine received {count} vehicle")]
fn then_vehicle_bound(count: i32) {
    let calls = take_calls();
    assert!(!calls.is_empty());
    assert!(calls.iter().all(|call| call.max_vehicles == count));
}

#[then("the engine received no calls")]
fn then_no_calls() {
    assert!(take_calls().is_empty());
}

#[then("the engine solution was released {count} time")]
fn then_released(count: usize) {
    assert_eq!(released_solutions(), count);
}

#[then("the solve fails with a validation error")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_validation_error(world: &SolverWorld) {
    let err = world.expect_outcome().expect_err("expected a failure");
    assert!(matches!(err, SolveError::Validation(_)));
}

#[then("the solve fails with a null solution from solve_cvrp")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_null_solution(world: &SolverWorld) {
    let err = world.expect_outcome().expect_err("expected a failure");
    assert_eq!(
        err,
        SolveError::Engine(EngineError::NullSolution {
            entry_point: EntryPoint::Coordinates,
        })
    );
}

#[then("the solve fails with a malformed solution")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_malformed(world: &SolverWorld) {
    let err = world.expect_outcome().expect_err("expected a failure");
    assert!(matches!(
        err,
        SolveError::Engine(EngineError::MalformedSolution { .. })
    ));
}

#[scenario(path = "tests/features/native_solver.feature", index = 0)]
fn coordinate_instance_solved(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/native_solver.feature", index = 1)]
fn tour_solved_as_one_route(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/native_solver.feature", index = 2)]
fn invalid_record_rejected(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/native_solver.feature", index = 3)]
fn null_result_reported(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/native_solver.feature", index = 4)]
fn malformed_result_reported(world: SolverWorld) {
    let _ = world;
}
