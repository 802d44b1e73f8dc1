//! Reference instances shared by unit, behaviour and property tests.
//!
//! The delivery and tour instances carry published best costs for the HGS
//! engine (6208 and 7293 respectively); the duration instance has a known cost
//! of 42 under seed 12 with SWAP* and integer rounding.

use std::time::Duration;

use crate::{AlgorithmConfig, InstanceData, TspData};

/// Best known cost of [`delivery_instance`].
pub const DELIVERY_COST: f64 = 6208.0;
/// Best known cost of [`tour_instance`].
pub const TOUR_COST: f64 = 7293.0;
/// Known cost of [`duration_instance`] under [`duration_config`].
pub const DURATION_COST: f64 = 42.0;

const DELIVERY_MATRIX: [[f64; 17]; 17] = [
    [
        0.0, 548.0, 776.0, 696.0, 582.0, 274.0, 502.0, 194.0, 308.0, 194.0, 536.0, 502.0, 388.0,
        354.0, 468.0, 776.0, 662.0,
    ],
    [
        548.0, 0.0, 684.0, 308.0, 194.0, 502.0, 730.0, 354.0, 696.0, 742.0, 1084.0, 594.0,
        480.0, 674.0, 1016.0, 868.0, 1210.0,
    ],
    [
        776.0, 684.0, 0.0, 992.0, 878.0, 502.0, 274.0, 810.0, 468.0, 742.0, 400.0, 1278.0,
        1164.0, 1130.0, 788.0, 1552.0, 754.0,
    ],
    [
        696.0, 308.0, 992.0, 0.0, 114.0, 650.0, 878.0, 502.0, 844.0, 890.0, 1232.0, 514.0,
        628.0, 822.0, 1164.0, 560.0, 1358.0,
    ],
    [
        582.0, 194.0, 878.0, 114.0, 0.0, 536.0, 764.0, 388.0, 730.0, 776.0, 1118.0, 400.0,
        514.0, 708.0, 1050.0, 674.0, 1244.0,
    ],
    [
        274.0, 502.0, 502.0, 650.0, 536.0, 0.0, 228.0, 308.0, 194.0, 240.0, 582.0, 776.0, 662.0,
        628.0, 514.0, 1050.0, 708.0,
    ],
    [
        502.0, 730.0, 274.0, 878.0, 764.0, 228.0, 0.0, 536.0, 194.0, 468.0, 354.0, 1004.0,
        890.0, 856.0, 514.0, 1278.0, 480.0,
    ],
    [
        194.0, 354.0, 810.0, 502.0, 388.0, 308.0, 536.0, 0.0, 342.0, 388.0, 730.0, 468.0, 354.0,
        320.0, 662.0, 742.0, 856.0,
    ],
    [
        308.0, 696.0, 468.0, 844.0, 730.0, 194.0, 194.0, 342.0, 0.0, 274.0, 388.0, 810.0, 696.0,
        662.0, 320.0, 1084.0, 514.0,
    ],
    [
        194.0, 742.0, 742.0, 890.0, 776.0, 240.0, 468.0, 388.0, 274.0, 0.0, 342.0, 536.0, 422.0,
        388.0, 274.0, 810.0, 468.0,
    ],
    [
        536.0, 1084.0, 400.0, 1232.0, 1118.0, 582.0, 354.0, 730.0, 388.0, 342.0, 0.0, 878.0,
        764.0, 730.0, 388.0, 1152.0, 354.0,
    ],
    [
        502.0, 594.0, 1278.0, 514.0, 400.0, 776.0, 1004.0, 468.0, 810.0, 536.0, 878.0, 0.0,
        114.0, 308.0, 650.0, 274.0, 844.0,
    ],
    [
        388.0, 480.0, 1164.0, 628.0, 514.0, 662.0, 890.0, 354.0, 696.0, 422.0, 764.0, 114.0,
        0.0, 194.0, 536.0, 388.0, 730.0,
    ],
    [
        354.0, 674.0, 1130.0, 822.0, 708.0, 628.0, 856.0, 320.0, 662.0, 388.0, 730.0, 308.0,
        194.0, 0.0, 342.0, 422.0, 536.0,
    ],
    [
        468.0, 1016.0, 788.0, 1164.0, 1050.0, 514.0, 514.0, 662.0, 320.0, 274.0, 388.0, 650.0,
        536.0, 342.0, 0.0, 764.0, 194.0,
    ],
    [
        776.0, 868.0, 1552.0, 560.0, 674.0, 1050.0, 1278.0, 742.0, 1084.0, 810.0, 1152.0, 274.0,
        388.0, 422.0, 764.0, 0.0, 798.0,
    ],
    [
        662.0, 1210.0, 754.0, 1358.0, 1244.0, 708.0, 480.0, 856.0, 514.0, 468.0, 354.0, 844.0,
        730.0, 536.0, 194.0, 798.0, 0.0,
    ],
];

const TOUR_MATRIX: [[f64; 13]; 13] = [
    [
        0.0, 2451.0, 713.0, 1018.0, 1631.0, 1374.0, 2408.0, 213.0, 2571.0, 875.0, 1420.0,
        2145.0, 1972.0,
    ],
    [
        2451.0, 0.0, 1745.0, 1524.0, 831.0, 1240.0, 959.0, 2596.0, 403.0, 1589.0, 1374.0, 357.0,
        579.0,
    ],
    [
        713.0, 1745.0, 0.0, 355.0, 920.0, 803.0, 1737.0, 851.0, 1858.0, 262.0, 940.0, 1453.0,
        1260.0,
    ],
    [
        1018.0, 1524.0, 355.0, 0.0, 700.0, 862.0, 1395.0, 1123.0, 1584.0, 466.0, 1056.0, 1280.0,
        987.0,
    ],
    [
        1631.0, 831.0, 920.0, 700.0, 0.0, 663.0, 1021.0, 1769.0, 949.0, 796.0, 879.0, 586.0,
        371.0,
    ],
    [
        1374.0, 1240.0, 803.0, 862.0, 663.0, 0.0, 1681.0, 1551.0, 1765.0, 547.0, 225.0, 887.0,
        999.0,
    ],
    [
        2408.0, 959.0, 1737.0, 1395.0, 1021.0, 1681.0, 0.0, 2493.0, 678.0, 1724.0, 1891.0,
        1114.0, 701.0,
    ],
    [
        213.0, 2596.0, 851.0, 1123.0, 1769.0, 1551.0, 2493.0, 0.0, 2699.0, 1038.0, 1605.0,
        2300.0, 2099.0,
    ],
    [
        2571.0, 403.0, 1858.0, 1584.0, 949.0, 1765.0, 678.0, 2699.0, 0.0, 1744.0, 1645.0, 653.0,
        600.0,
    ],
    [
        875.0, 1589.0, 262.0, 466.0, 796.0, 547.0, 1724.0, 1038.0, 1744.0, 0.0, 679.0, 1272.0,
        1162.0,
    ],
    [
        1420.0, 1374.0, 940.0, 1056.0, 879.0, 225.0, 1891.0, 1605.0, 1645.0, 679.0, 0.0, 1017.0,
        1200.0,
    ],
    [
        2145.0, 357.0, 1453.0, 1280.0, 586.0, 887.0, 1114.0, 2300.0, 653.0, 1272.0, 1017.0, 0.0,
        504.0,
    ],
    [
        1972.0, 579.0, 1260.0, 987.0, 371.0, 999.0, 701.0, 2099.0, 600.0, 1162.0, 1200.0, 504.0,
        0.0,
    ],
];

/// Seventeen-node delivery problem: four vehicles of capacity 15 over a fixed
/// distance matrix.
#[must_use]
pub fn delivery_instance() -> InstanceData {
    InstanceData::new(
        vec![
            0.0, 1.0, 1.0, 2.0, 4.0, 2.0, 4.0, 8.0, 8.0, 1.0, 2.0, 1.0, 2.0, 4.0, 4.0, 8.0, 8.0,
        ],
        15.0,
    )
    .with_depot(0)
    .with_distance_matrix(rows(&DELIVERY_MATRIX))
    .with_max_vehicles(4)
}

/// Parameters used with [`delivery_instance`].
#[must_use]
pub fn delivery_config() -> AlgorithmConfig {
    AlgorithmConfig::default().with_time_limit(Duration::from_millis(1100))
}

/// Thirteen-city tour over a fixed distance matrix.
#[must_use]
pub fn tour_instance() -> TspData {
    TspData::from_distance_matrix(rows(&TOUR_MATRIX))
}

/// Parameters used with [`tour_instance`].
#[must_use]
pub fn tour_config() -> AlgorithmConfig {
    AlgorithmConfig::default().with_time_limit(Duration::from_millis(800))
}

/// Ten-node coordinate instance with a route duration limit of 18.
#[must_use]
pub fn duration_instance() -> InstanceData {
    InstanceData::new(
        vec![0.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0],
        10.0,
    )
    .with_coordinates(
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        vec![5.0, 4.0, 3.0, 2.0, 1.0, 9.0, 8.0, 7.0, 6.0, 5.0],
    )
    .with_duration_limit(18.0)
    .with_max_vehicles(5)
}

/// Parameters used with [`duration_instance`].
#[must_use]
pub fn duration_config() -> AlgorithmConfig {
    AlgorithmConfig::default()
        .with_time_limit(Duration::from_millis(1100))
        .with_seed(12)
        .with_swap_star(true)
}

/// Four clients on a 3-4-5 grid around the depot.
///
/// Small enough to reason about by hand: every client has demand 1 and the
/// capacity admits all of them on one route.
#[must_use]
pub fn small_coordinate_instance() -> InstanceData {
    InstanceData::new(vec![0.0, 1.0, 1.0, 1.0, 1.0], 4.0).with_coordinates(
        vec![0.0, 3.0, 3.0, 0.0, 6.0],
        vec![0.0, 0.0, 4.0, 4.0, 0.0],
    )
}

fn rows<const N: usize>(matrix: &[[f64; N]; N]) -> Vec<Vec<f64>> {
    matrix.iter().map(|row| row.to_vec()).collect()
}
