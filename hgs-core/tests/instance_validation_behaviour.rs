//! Behavioural tests for instance validation using rstest-bdd.

use std::cell::RefCell;

use hgs_core::test_support::{small_coordinate_instance, tour_instance};
use hgs_core::{InstanceData, ProblemInstance, TspData, ValidationError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct ValidationWorld {
    record: RefCell<Option<InstanceData>>,
    tsp: RefCell<Option<TspData>>,
    outcome: RefCell<Option<Result<ProblemInstance, ValidationError>>>,
}

impl ValidationWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<ProblemInstance, ValidationError> {
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
    fn expect_instance(&self) -> ProblemInstance {
        self.expect_outcome().expect("expected a valid instance")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_error(&self) -> ValidationError {
        self.expect_outcome()
            .expect_err("expected validation to fail")
    }
}

#[fixture]
fn world() -> ValidationWorld {
    ValidationWorld::default()
}

#[given("a record with coordinates for {count} nodes")]
fn given_coordinate_record(world: &ValidationWorld, count: usize) {
    let data = small_coordinate_instance();
    assert_eq!(data.demands.len(), count);
    world.record.replace(Some(data));
}

#[given("a record with demands but no distances")]
fn given_record_without_distances(world: &ValidationWorld) {
    world
        .record
        .replace(Some(InstanceData::new(vec![0.0, 1.0, 2.0], 5.0)));
}

#[given("the depot is node {depot}")]
fn given_depot(world: &ValidationWorld, depot: i64) {
    let updated = world.record.borrow_mut().take().map(|data| data.with_depot(depot));
    world.record.replace(updated);
}

#[given("a record with a {rows} by {columns} matrix and {demands} demands")]
fn given_mismatched_matrix(world: &ValidationWorld, rows: usize, columns: usize, demands: usize) {
    let data = InstanceData::new(vec![1.0; demands], 10.0)
        .with_distance_matrix(vec![vec![1.0; columns]; rows]);
    world.record.replace(Some(data));
}

#[given("a TSP request over the reference tour")]
fn given_tsp_request(world: &ValidationWorld) {
    world.tsp.replace(Some(tour_instance()));
}

#[when("the record is validated")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn when_validated(world: &ValidationWorld) {
    let data = world
        .record
        .borrow()
        .clone()
        .expect("a record should be prepared");
    world.outcome.replace(Some(data.build()));
}

#[when("the request is reduced")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn when_reduced(world: &ValidationWorld) {
    let outcome = world
        .tsp
        .borrow()
        .as_ref()
        .expect("a TSP request should be prepared")
        .reduce();
    world.outcome.replace(Some(outcome));
}

#[then("the instance has {count} nodes")]
fn then_node_count(world: &ValidationWorld, count: usize) {
    assert_eq!(world.expect_instance().node_count(), count);
}

#[then("service times default to zero")]
fn then_zero_service_times(world: &ValidationWorld) {
    let instance = world.expect_instance();
    assert!(instance.service_times().iter().all(|time| *time == 0.0));
}

#[then("the fleet is limited to one vehicle")]
fn then_single_vehicle(world: &ValidationWorld) {
    assert_eq!(world.expect_instance().max_vehicles(), 1);
}

#[then("validation fails with missing distances")]
fn then_missing_distances(world: &ValidationWorld) {
    assert_eq!(world.expect_error(), ValidationError::MissingDistances);
}

#[then("validation fails with a non-zero depot")]
fn then_non_zero_depot(world: &ValidationWorld) {
    assert!(matches!(
        world.expect_error(),
        ValidationError::NonZeroDepot { .. }
    ));
}

#[then("validation fails with a matrix dimension mismatch")]
fn then_matrix_dimension(world: &ValidationWorld) {
    assert_eq!(
        world.expect_error(),
        ValidationError::MatrixDimension {
            expected: 3,
            actual: 4,
        }
    );
}

#[scenario(path = "tests/features/instance_validation.feature", index = 0)]
fn coordinate_instance_accepted(world: ValidationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/instance_validation.feature", index = 1)]
fn missing_distances_rejected(world: ValidationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/instance_validation.feature", index = 2)]
fn non_zero_depot_rejected(world: ValidationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/instance_validation.feature", index = 3)]
fn short_demands_rejected(world: ValidationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/instance_validation.feature", index = 4)]
fn tsp_reduced_to_single_vehicle(world: ValidationWorld) {
    let _ = world;
}
