//! Canonical routing instances and their validation.
//!
//! [`InstanceData`] is what callers hand in; [`ProblemInstance`] is what the
//! solver boundary accepts. The only way to obtain a `ProblemInstance` is to
//! validate an `InstanceData`, so every instance that reaches the native
//! engine already satisfies the length, sign and depot invariants.

mod data;
mod error;
mod validate;

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use data::InstanceData;
pub use error::{InstanceField, ValidationError};

/// How the engine treats distances it computes from coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistanceRounding {
    /// Round each Euclidean distance to the nearest integer.
    #[default]
    Integer,
    /// Keep Euclidean distances as real numbers.
    Continuous,
}

impl DistanceRounding {
    /// Whether distances are rounded to integers.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer)
    }
}

/// Square distance matrix stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    dimension: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Number of rows (and columns).
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Entries in row-major order; `dimension²` values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Distance from `from` to `to`, if both indices are in range.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.dimension || to >= self.dimension {
            return None;
        }
        from.checked_mul(self.dimension)
            .and_then(|offset| offset.checked_add(to))
            .and_then(|index| self.values.get(index))
            .copied()
    }

    /// Copy the matrix back into rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.dimension == 0 {
            return Vec::new();
        }
        self.values
            .chunks(self.dimension)
            .map(<[f64]>::to_vec)
            .collect()
    }
}

/// A validated CVRP instance.
///
/// Node 0 is the depot. Every per-node sequence has [`node_count`] entries and
/// all values are finite and non-negative. When the caller supplied only a
/// distance matrix the coordinates are zero-filled placeholders.
///
/// [`node_count`]: ProblemInstance::node_count
///
/// # Examples
/// ```rust
/// use hgs_core::{InstanceData, ProblemInstance, UNBOUNDED_VEHICLES};
///
/// let data = InstanceData::new(vec![0.0, 2.0], 5.0)
///     .with_distance_matrix(vec![vec![0.0, 7.0], vec![7.0, 0.0]]);
/// let instance = ProblemInstance::try_from(data)?;
/// assert!(instance.distance_matrix().is_some());
/// assert_eq!(instance.service_times(), &[0.0, 0.0]);
/// assert_eq!(i64::from(instance.max_vehicles()), i64::from(UNBOUNDED_VEHICLES));
/// # Ok::<(), hgs_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemInstance {
    coordinates: Vec<Coord<f64>>,
    distance_matrix: Option<DistanceMatrix>,
    demands: Vec<f64>,
    service_times: Vec<f64>,
    vehicle_capacity: f64,
    max_vehicles: u32,
    duration_limit: Option<f64>,
    rounding: DistanceRounding,
}

impl ProblemInstance {
    /// Number of nodes, depot included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.demands.len()
    }

    /// Node coordinates, zero-filled when only a matrix was supplied.
    #[must_use]
    pub fn coordinates(&self) -> &[Coord<f64>] {
        &self.coordinates
    }

    /// The distance matrix, when one was supplied.
    #[must_use]
    pub const fn distance_matrix(&self) -> Option<&DistanceMatrix> {
        self.distance_matrix.as_ref()
    }

    /// Node demands.
    #[must_use]
    pub fn demands(&self) -> &[f64] {
        &self.demands
    }

    /// Node service times.
    #[must_use]
    pub fn service_times(&self) -> &[f64] {
        &self.service_times
    }

    /// Capacity shared by every vehicle.
    #[must_use]
    pub const fn vehicle_capacity(&self) -> f64 {
        self.vehicle_capacity
    }

    /// Upper bound on the number of vehicles.
    #[must_use]
    pub const fn max_vehicles(&self) -> u32 {
        self.max_vehicles
    }

    /// Maximum route duration, when constrained.
    #[must_use]
    pub const fn duration_limit(&self) -> Option<f64> {
        self.duration_limit
    }

    /// Rounding applied to coordinate-derived distances.
    #[must_use]
    pub const fn rounding(&self) -> DistanceRounding {
        self.rounding
    }

    /// Convert back into a raw record.
    ///
    /// Validating the result yields an instance equal to `self`.
    #[must_use]
    pub fn to_data(&self) -> InstanceData {
        InstanceData {
            depot: Some(0),
            x_coordinates: Some(self.coordinates.iter().map(|c| c.x).collect()),
            y_coordinates: Some(self.coordinates.iter().map(|c| c.y).collect()),
            distance_matrix: self.distance_matrix.as_ref().map(DistanceMatrix::to_rows),
            demands: self.demands.clone(),
            service_times: Some(self.service_times.clone()),
            vehicle_capacity: self.vehicle_capacity,
            num_vehicles: Some(self.max_vehicles),
            duration_limit: self.duration_limit,
            rounding: self.rounding,
        }
    }
}

impl TryFrom<InstanceData> for ProblemInstance {
    type Error = ValidationError;

    fn try_from(data: InstanceData) -> Result<Self, Self::Error> {
        validate::validate(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn coordinate_data() -> InstanceData {
        InstanceData::new(vec![0.0, 1.0, 2.0], 3.0)
            .with_coordinates(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0])
    }

    #[fixture]
    fn matrix_rows() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ]
    }

    #[rstest]
    fn rejects_explicit_non_zero_depot(coordinate_data: InstanceData) {
        let err = coordinate_data
            .with_depot(2)
            .build()
            .expect_err("depot 2 must be rejected");
        assert_eq!(err, ValidationError::NonZeroDepot { depot: 2 });
    }

    #[rstest]
    fn accepts_explicit_zero_depot(coordinate_data: InstanceData) {
        assert!(coordinate_data.with_depot(0).build().is_ok());
    }

    #[rstest]
    fn rejects_missing_distances() {
        let err = InstanceData::new(vec![0.0, 1.0], 1.0)
            .build()
            .expect_err("no distance information");
        assert_eq!(err, ValidationError::MissingDistances);
    }

    #[rstest]
    fn depot_rule_is_checked_before_distance_rule() {
        let err = InstanceData::new(vec![0.0, 1.0], 1.0)
            .with_depot(1)
            .build()
            .expect_err("both rules violated");
        assert_eq!(err, ValidationError::NonZeroDepot { depot: 1 });
    }

    #[rstest]
    fn zero_fills_coordinates_for_matrix_only_input(matrix_rows: Vec<Vec<f64>>) {
        let instance = InstanceData::new(vec![0.0, 1.0, 1.0], 2.0)
            .with_distance_matrix(matrix_rows)
            .build()
            .expect("matrix-only instance is valid");
        assert!(instance
            .coordinates()
            .iter()
            .all(|c| c.x == 0.0 && c.y == 0.0));
        assert_eq!(instance.coordinates().len(), 3);
    }

    #[rstest]
    fn rejects_single_axis_with_matrix(matrix_rows: Vec<Vec<f64>>) {
        let mut data = InstanceData::new(vec![0.0, 1.0, 1.0], 2.0).with_distance_matrix(matrix_rows);
        data.x_coordinates = Some(vec![0.0, 1.0, 2.0]);
        let err = data.build().expect_err("y is missing");
        assert_eq!(
            err,
            ValidationError::IncompleteCoordinates {
                present: InstanceField::XCoordinates,
                missing: InstanceField::YCoordinates,
            }
        );
    }

    #[rstest]
    fn stores_matrix_row_major(matrix_rows: Vec<Vec<f64>>) {
        let instance = InstanceData::new(vec![0.0, 1.0, 1.0], 2.0)
            .with_distance_matrix(matrix_rows.clone())
            .build()
            .expect("valid instance");
        let matrix = instance.distance_matrix().expect("matrix retained");
        assert_eq!(matrix.dimension(), 3);
        assert_eq!(
            matrix.values(),
            &[0.0, 1.0, 2.0, 1.0, 0.0, 3.0, 2.0, 3.0, 0.0]
        );
        assert_eq!(matrix.get(1, 2), Some(3.0));
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(matrix.to_rows(), matrix_rows);
    }

    #[rstest]
    fn defaults_optional_fields(coordinate_data: InstanceData) {
        let instance = coordinate_data.build().expect("valid instance");
        assert_eq!(instance.service_times(), &[0.0, 0.0, 0.0]);
        assert_eq!(instance.max_vehicles(), i32::MAX.unsigned_abs());
        assert_eq!(instance.duration_limit(), None);
        assert_eq!(instance.rounding(), DistanceRounding::Integer);
    }

    #[rstest]
    fn round_trips_through_data(coordinate_data: InstanceData) {
        let instance = coordinate_data
            .with_duration_limit(10.0)
            .with_max_vehicles(2)
            .build()
            .expect("valid instance");
        let again = instance.to_data().build().expect("still valid");
        assert_eq!(again, instance);
    }

    #[rstest]
    fn accepts_non_zero_depot_demand() {
        let instance = InstanceData::new(vec![3.0, 1.0], 4.0)
            .with_coordinates(vec![0.0, 1.0], vec![0.0, 1.0])
            .build()
            .expect("depot demand is left to the engine");
        assert_eq!(instance.demands().first().copied(), Some(3.0));
    }
}
