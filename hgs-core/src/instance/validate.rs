//! Validation rules turning an [`InstanceData`] into a [`ProblemInstance`].
//!
//! Rules run in a fixed order and the first violation wins:
//!
//! 1. an explicit depot must be node 0;
//! 2. complete coordinates or a distance matrix must be present;
//! 3. coordinates come as an x/y pair, and are zero-filled when only a
//!    matrix is given;
//! 4. every per-node sequence has one entry per demand and the matrix is
//!    square with the same dimension;
//! 5. all numeric entries are finite and non-negative;
//! 6. vehicle capacity is positive and finite;
//! 7. the fleet bound and duration limit, when present, are in range.

use geo::Coord;
use log::warn;

use crate::config::UNBOUNDED_VEHICLES;

use super::{
    DistanceMatrix, InstanceData, InstanceField, ProblemInstance, ValidationError,
};

/// Largest node count the engine can index with a 32-bit signed integer.
pub(crate) const MAX_NODES: usize = i32::MAX.unsigned_abs() as usize;

const MAX_VEHICLES: u32 = UNBOUNDED_VEHICLES.unsigned_abs();

pub(super) fn validate(data: InstanceData) -> Result<ProblemInstance, ValidationError> {
    let InstanceData {
        depot,
        x_coordinates,
        y_coordinates,
        distance_matrix,
        demands,
        service_times,
        vehicle_capacity,
        num_vehicles,
        duration_limit,
        rounding,
    } = data;

    if let Some(index) = depot
        && index != 0
    {
        return Err(ValidationError::NonZeroDepot { depot: index });
    }

    let has_complete_coordinates = x_coordinates.is_some() && y_coordinates.is_some();
    if !has_complete_coordinates && distance_matrix.is_none() {
        return Err(ValidationError::MissingDistances);
    }
    check_coordinate_pair(x_coordinates.as_ref(), y_coordinates.as_ref())?;

    let node_count = demands.len();
    if node_count == 0 {
        return Err(ValidationError::Empty);
    }
    if node_count > MAX_NODES {
        return Err(ValidationError::TooManyNodes {
            nodes: node_count,
            max: MAX_NODES,
        });
    }

    let x = x_coordinates.unwrap_or_else(|| vec![0.0; node_count]);
    let y = y_coordinates.unwrap_or_else(|| vec![0.0; node_count]);
    let service_times = service_times.unwrap_or_else(|| vec![0.0; node_count]);
    check_length(InstanceField::XCoordinates, &x, node_count)?;
    check_length(InstanceField::YCoordinates, &y, node_count)?;
    check_length(InstanceField::ServiceTimes, &service_times, node_count)?;
    let distance_matrix = distance_matrix
        .map(|rows| flatten_matrix(rows, node_count))
        .transpose()?;

    check_finite_non_negative(InstanceField::XCoordinates, &x)?;
    check_finite_non_negative(InstanceField::YCoordinates, &y)?;
    check_finite_non_negative(InstanceField::ServiceTimes, &service_times)?;
    check_finite_non_negative(InstanceField::Demands, &demands)?;
    if let Some(matrix) = &distance_matrix {
        check_finite_non_negative(InstanceField::DistanceMatrix, matrix.values())?;
    }

    if !vehicle_capacity.is_finite() || vehicle_capacity <= 0.0 {
        return Err(ValidationError::NonPositiveCapacity {
            capacity: vehicle_capacity,
        });
    }
    let max_vehicles = match num_vehicles {
        Some(vehicles) if vehicles == 0 || vehicles > MAX_VEHICLES => {
            return Err(ValidationError::InvalidVehicleCount {
                vehicles,
                max: MAX_VEHICLES,
            });
        }
        Some(vehicles) => vehicles,
        None => MAX_VEHICLES,
    };
    if let Some(limit) = duration_limit
        && (!limit.is_finite() || limit <= 0.0)
    {
        return Err(ValidationError::NonPositiveDurationLimit { limit });
    }

    if let Some(depot_demand) = demands.first().copied()
        && depot_demand != 0.0
    {
        warn!("depot demand is {depot_demand}; the engine decides how to treat it");
    }

    let coordinates = x
        .into_iter()
        .zip(y)
        .map(|(x_value, y_value)| Coord {
            x: x_value,
            y: y_value,
        })
        .collect();

    Ok(ProblemInstance {
        coordinates,
        distance_matrix,
        demands,
        service_times,
        vehicle_capacity,
        max_vehicles,
        duration_limit,
        rounding,
    })
}

fn check_coordinate_pair(
    x: Option<&Vec<f64>>,
    y: Option<&Vec<f64>>,
) -> Result<(), ValidationError> {
    match (x, y) {
        (Some(_), None) => Err(ValidationError::IncompleteCoordinates {
            present: InstanceField::XCoordinates,
            missing: InstanceField::YCoordinates,
        }),
        (None, Some(_)) => Err(ValidationError::IncompleteCoordinates {
            present: InstanceField::YCoordinates,
            missing: InstanceField::XCoordinates,
        }),
        _ => Ok(()),
    }
}

fn check_length(
    field: InstanceField,
    values: &[f64],
    expected: usize,
) -> Result<(), ValidationError> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(ValidationError::LengthMismatch {
            field,
            expected,
            actual: values.len(),
        })
    }
}

fn flatten_matrix(
    rows: Vec<Vec<f64>>,
    dimension: usize,
) -> Result<DistanceMatrix, ValidationError> {
    if rows.len() != dimension {
        return Err(ValidationError::MatrixDimension {
            expected: dimension,
            actual: rows.len(),
        });
    }
    let mut values = Vec::with_capacity(dimension.saturating_mul(dimension));
    for (row, entries) in rows.into_iter().enumerate() {
        if entries.len() != dimension {
            return Err(ValidationError::NonSquareMatrix {
                row,
                expected: dimension,
                actual: entries.len(),
            });
        }
        values.extend(entries);
    }
    Ok(DistanceMatrix { dimension, values })
}

fn check_finite_non_negative(
    field: InstanceField,
    values: &[f64],
) -> Result<(), ValidationError> {
    for (index, value) in values.iter().copied().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field,
                index,
                value,
            });
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeValue {
                field,
                index,
                value,
            });
        }
    }
    Ok(())
}
