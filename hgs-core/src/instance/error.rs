//! Validation failures and the inputs they name.

use std::fmt;

use thiserror::Error;

/// Per-node or matrix input named by a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceField {
    /// `x_coordinates`.
    XCoordinates,
    /// `y_coordinates`.
    YCoordinates,
    /// `service_times`.
    ServiceTimes,
    /// `demands`.
    Demands,
    /// `distance_matrix`.
    DistanceMatrix,
}

impl fmt::Display for InstanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::XCoordinates => "x_coordinates",
            Self::YCoordinates => "y_coordinates",
            Self::ServiceTimes => "service_times",
            Self::Demands => "demands",
            Self::DistanceMatrix => "distance_matrix",
        };
        f.write_str(name)
    }
}

/// Reasons an instance is rejected before reaching the native engine.
///
/// Variants are listed in the order the rules are checked; only the first
/// violation is reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The engine hard-codes node 0 as the depot.
    #[error("the depot must be node 0, got {depot}")]
    NonZeroDepot {
        /// Depot index supplied by the caller.
        depot: i64,
    },
    /// Neither complete coordinates nor a distance matrix were supplied.
    #[error("either x/y coordinates or a distance matrix is required")]
    MissingDistances,
    /// Only one coordinate axis was supplied.
    #[error("{present} was supplied without {missing}")]
    IncompleteCoordinates {
        /// Axis that was supplied.
        present: InstanceField,
        /// Axis that was missing.
        missing: InstanceField,
    },
    /// The instance has no nodes at all.
    #[error("the instance must contain at least the depot")]
    Empty,
    /// The node count exceeds what the engine's 32-bit index can address.
    #[error("{nodes} nodes exceed the engine limit of {max}")]
    TooManyNodes {
        /// Node count derived from the input.
        nodes: usize,
        /// Largest supported node count.
        max: usize,
    },
    /// A per-node sequence does not have one entry per node.
    #[error("{field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        /// Offending sequence.
        field: InstanceField,
        /// Node count derived from `demands`.
        expected: usize,
        /// Length found.
        actual: usize,
    },
    /// The distance matrix row count differs from the node count.
    #[error("distance matrix has {actual} rows, expected {expected}")]
    MatrixDimension {
        /// Node count derived from `demands`.
        expected: usize,
        /// Row count found.
        actual: usize,
    },
    /// A distance matrix row has the wrong length.
    #[error("distance matrix row {row} has {actual} entries, expected {expected}")]
    NonSquareMatrix {
        /// Index of the offending row.
        row: usize,
        /// Expected row length.
        expected: usize,
        /// Row length found.
        actual: usize,
    },
    /// A numeric entry is infinite or not a number.
    #[error("{field}[{index}] must be finite, got {value}")]
    NonFiniteValue {
        /// Offending input.
        field: InstanceField,
        /// Flat position of the entry (row-major for the matrix).
        index: usize,
        /// Value found.
        value: f64,
    },
    /// A numeric entry is negative.
    #[error("{field}[{index}] must be non-negative, got {value}")]
    NegativeValue {
        /// Offending input.
        field: InstanceField,
        /// Flat position of the entry (row-major for the matrix).
        index: usize,
        /// Value found.
        value: f64,
    },
    /// Vehicle capacity is not a positive finite number.
    #[error("vehicle capacity must be positive and finite, got {capacity}")]
    NonPositiveCapacity {
        /// Capacity supplied.
        capacity: f64,
    },
    /// The fleet bound is zero or does not fit the engine's vehicle count.
    #[error("number of vehicles must be between 1 and {max}, got {vehicles}")]
    InvalidVehicleCount {
        /// Fleet bound supplied.
        vehicles: u32,
        /// Largest supported fleet bound.
        max: u32,
    },
    /// The duration limit is not a positive finite number.
    #[error("duration limit must be positive and finite, got {limit}")]
    NonPositiveDurationLimit {
        /// Limit supplied.
        limit: f64,
    },
}
