//! Routes returned by a solve.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one solve call, owned entirely by the caller.
///
/// Each route lists the client nodes a vehicle visits in order; the depot is
/// implicit at both ends and never appears in the lists.
///
/// # Examples
/// ```rust
/// use hgs_core::Solution;
///
/// let solution = Solution::new(42.0, 0.5, vec![vec![2, 1], vec![3]]);
/// assert_eq!(solution.route_count(), 2);
/// assert_eq!(solution.visited_nodes().collect::<Vec<_>>(), vec![2, 1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Total cost reported by the engine.
    pub cost: f64,
    /// Search time reported by the engine, in seconds.
    pub elapsed_time: f64,
    /// One node sequence per vehicle used.
    pub routes: Vec<Vec<usize>>,
}

impl Solution {
    /// Assemble a solution from its parts.
    #[must_use]
    pub const fn new(cost: f64, elapsed_time: f64, routes: Vec<Vec<usize>>) -> Self {
        Self {
            cost,
            elapsed_time,
            routes,
        }
    }

    /// Number of vehicles used.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Every visited node, route by route.
    pub fn visited_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.routes.iter().flatten().copied()
    }
}
