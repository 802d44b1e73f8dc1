//! Travelling salesman requests and their reduction to CVRP.
//!
//! The engine has no TSP entry point. A TSP over `n` nodes is solved as a CVRP
//! with one vehicle, unit demands and capacity `n`, so capacity never binds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DistanceRounding, InstanceData, ProblemInstance, ValidationError};

/// Unvalidated TSP request: distances only, no fleet or demand data.
///
/// # Examples
/// ```rust
/// use hgs_core::TspData;
///
/// let tsp = TspData::from_distance_matrix(vec![
///     vec![0.0, 4.0, 2.0],
///     vec![4.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]);
/// let instance = tsp.reduce()?;
/// assert_eq!(instance.max_vehicles(), 1);
/// assert_eq!(instance.demands(), &[1.0, 1.0, 1.0]);
/// assert!((instance.vehicle_capacity() - 3.0).abs() < f64::EPSILON);
/// # Ok::<(), hgs_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TspData {
    /// Node x coordinates.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub x_coordinates: Option<Vec<f64>>,
    /// Node y coordinates.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub y_coordinates: Option<Vec<f64>>,
    /// Pairwise distances, one row per node.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub distance_matrix: Option<Vec<Vec<f64>>>,
    /// Service time of each node; zeros when omitted.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub service_times: Option<Vec<f64>>,
    /// Rounding applied to coordinate-derived distances.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rounding: DistanceRounding,
}

impl TspData {
    /// A TSP over coordinates.
    #[must_use]
    pub fn from_coordinates(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x_coordinates: Some(x),
            y_coordinates: Some(y),
            ..Self::default()
        }
    }

    /// A TSP over an explicit distance matrix.
    #[must_use]
    pub fn from_distance_matrix(rows: Vec<Vec<f64>>) -> Self {
        Self {
            distance_matrix: Some(rows),
            ..Self::default()
        }
    }

    /// Add a distance matrix to a coordinate request, or vice versa.
    #[must_use]
    pub fn with_distance_matrix(mut self, rows: Vec<Vec<f64>>) -> Self {
        self.distance_matrix = Some(rows);
        self
    }

    /// Choose how coordinate-derived distances are rounded.
    #[must_use]
    pub const fn with_rounding(mut self, rounding: DistanceRounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Number of nodes implied by the request.
    ///
    /// The matrix takes precedence; otherwise the x coordinates decide.
    #[must_use]
    pub fn node_count(&self) -> Option<usize> {
        self.distance_matrix
            .as_ref()
            .map(Vec::len)
            .or_else(|| self.x_coordinates.as_ref().map(Vec::len))
    }

    /// Rewrite the request as a single-vehicle CVRP record.
    ///
    /// # Errors
    /// Returns [`ValidationError::MissingDistances`] when neither coordinates
    /// nor a matrix are present.
    pub fn to_cvrp_data(&self) -> Result<InstanceData, ValidationError> {
        let node_count = self
            .node_count()
            .ok_or(ValidationError::MissingDistances)?;
        #[expect(
            clippy::cast_precision_loss,
            reason = "validated node counts fit in 31 bits and convert exactly"
        )]
        let capacity = node_count as f64;
        Ok(InstanceData {
            depot: Some(0),
            x_coordinates: self.x_coordinates.clone(),
            y_coordinates: self.y_coordinates.clone(),
            distance_matrix: self.distance_matrix.clone(),
            demands: vec![1.0; node_count],
            service_times: self.service_times.clone(),
            vehicle_capacity: capacity,
            num_vehicles: Some(1),
            duration_limit: None,
            rounding: self.rounding,
        })
    }

    /// Reduce to a validated single-vehicle CVRP instance.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] of the reduced record.
    pub fn reduce(&self) -> Result<ProblemInstance, ValidationError> {
        self.to_cvrp_data()?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn matrix_decides_node_count() {
        let tsp = TspData::from_coordinates(vec![0.0, 1.0], vec![0.0, 1.0])
            .with_distance_matrix(vec![vec![0.0; 3]; 3]);
        assert_eq!(tsp.node_count(), Some(3));
    }

    #[rstest]
    fn mismatched_coordinates_fail_validation_after_reduction() {
        let tsp = TspData::from_coordinates(vec![0.0, 1.0], vec![0.0, 1.0])
            .with_distance_matrix(vec![vec![0.0; 3]; 3]);
        let err = tsp.reduce().expect_err("coordinates have two entries");
        assert!(matches!(err, ValidationError::LengthMismatch { .. }));
    }

    #[rstest]
    fn empty_request_is_missing_distances() {
        let err = TspData::default().reduce().expect_err("nothing to route");
        assert_eq!(err, ValidationError::MissingDistances);
    }

    #[rstest]
    fn reduction_sets_single_vehicle_fields() {
        let data = TspData::from_coordinates(vec![0.0, 3.0, 6.0, 9.0], vec![0.0; 4])
            .to_cvrp_data()
            .expect("coordinates present");
        assert_eq!(data.depot, Some(0));
        assert_eq!(data.num_vehicles, Some(1));
        assert_eq!(data.demands, vec![1.0; 4]);
        assert!((data.vehicle_capacity - 4.0).abs() < f64::EPSILON);
        assert_eq!(data.duration_limit, None);
    }
}
