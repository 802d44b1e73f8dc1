//! Raw instance record accepted from callers and configuration files.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{DistanceRounding, ProblemInstance, ValidationError};

/// Unvalidated description of a CVRP instance.
///
/// Field names follow the conventional request payload (`x_coordinates`,
/// `num_vehicles`, ...) so JSON instances prepared for other HGS front ends
/// deserialise unchanged. Optional fields may be omitted. Nothing is checked
/// until [`InstanceData::build`] (or `ProblemInstance::try_from`) runs the
/// validation rules.
///
/// # Examples
/// ```rust
/// use hgs_core::{InstanceData, ValidationError};
///
/// let instance = InstanceData::new(vec![0.0, 1.0, 1.0], 2.0)
///     .with_coordinates(vec![0.0, 3.0, 0.0], vec![0.0, 0.0, 4.0])
///     .with_max_vehicles(2)
///     .build()?;
/// assert_eq!(instance.node_count(), 3);
/// assert_eq!(instance.max_vehicles(), 2);
/// # Ok::<(), ValidationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InstanceData {
    /// Depot index; must be 0 when present.
    ///
    /// Signed, so a negative index in a payload fails validation with
    /// [`ValidationError::NonZeroDepot`].
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub depot: Option<i64>,
    /// Node x coordinates.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub x_coordinates: Option<Vec<f64>>,
    /// Node y coordinates.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub y_coordinates: Option<Vec<f64>>,
    /// Pairwise distances, one row per node.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub distance_matrix: Option<Vec<Vec<f64>>>,
    /// Demand of each node; its length defines the node count.
    pub demands: Vec<f64>,
    /// Service time of each node; zeros when omitted.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub service_times: Option<Vec<f64>>,
    /// Capacity shared by every vehicle.
    pub vehicle_capacity: f64,
    /// Upper bound on vehicles; unbounded when omitted.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub num_vehicles: Option<u32>,
    /// Maximum route duration; no duration constraint when omitted.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub duration_limit: Option<f64>,
    /// Rounding applied to coordinate-derived distances.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rounding: DistanceRounding,
}

impl InstanceData {
    /// Start a record from the two mandatory CVRP fields.
    #[must_use]
    pub fn new(demands: Vec<f64>, vehicle_capacity: f64) -> Self {
        Self {
            demands,
            vehicle_capacity,
            ..Self::default()
        }
    }

    /// Set an explicit depot index.
    #[must_use]
    pub const fn with_depot(mut self, depot: i64) -> Self {
        self.depot = Some(depot);
        self
    }

    /// Supply node coordinates.
    #[must_use]
    pub fn with_coordinates(mut self, x: Vec<f64>, y: Vec<f64>) -> Self {
        self.x_coordinates = Some(x);
        self.y_coordinates = Some(y);
        self
    }

    /// Supply a distance matrix as rows.
    #[must_use]
    pub fn with_distance_matrix(mut self, rows: Vec<Vec<f64>>) -> Self {
        self.distance_matrix = Some(rows);
        self
    }

    /// Supply per-node service times.
    #[must_use]
    pub fn with_service_times(mut self, service_times: Vec<f64>) -> Self {
        self.service_times = Some(service_times);
        self
    }

    /// Bound the number of vehicles.
    #[must_use]
    pub const fn with_max_vehicles(mut self, vehicles: u32) -> Self {
        self.num_vehicles = Some(vehicles);
        self
    }

    /// Impose a maximum route duration.
    #[must_use]
    pub const fn with_duration_limit(mut self, limit: f64) -> Self {
        self.duration_limit = Some(limit);
        self
    }

    /// Choose how coordinate-derived distances are rounded.
    #[must_use]
    pub const fn with_rounding(mut self, rounding: DistanceRounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Validate the record and produce a [`ProblemInstance`].
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] encountered.
    pub fn build(self) -> Result<ProblemInstance, ValidationError> {
        ProblemInstance::try_from(self)
    }
}
