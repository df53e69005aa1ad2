//! Cost metric selection for path search.

use serde::{Deserialize, Serialize};

use crate::domain::{Edge, Stop};

/// Which edge field the search minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostMetric {
    /// Minimize total straight-line distance travelled, in meters.
    Distance,
    /// Minimize total travel time, in seconds.
    Time,
}

/// The cost model consumed by the A* search: a metric plus the speed
/// bound that keeps the time heuristic admissible.
#[derive(Debug, Clone)]
pub struct CostModel {
    pub metric: CostMetric,

    /// Upper bound on the speed of any scheduled service, in meters per
    /// second. The time heuristic divides straight-line distance by this
    /// bound, so it underestimates only while no edge is faster.
    pub max_vehicle_speed_mps: f64,
}

impl CostModel {
    /// Model minimizing distance.
    pub fn distance() -> Self {
        Self {
            metric: CostMetric::Distance,
            ..Self::default()
        }
    }

    /// Model minimizing travel time, with the default speed bound.
    pub fn time() -> Self {
        Self {
            metric: CostMetric::Time,
            ..Self::default()
        }
    }

    /// The cost of traversing one edge under this metric.
    pub fn edge_cost(&self, edge: &Edge) -> f64 {
        match self.metric {
            CostMetric::Distance => edge.distance(),
            CostMetric::Time => edge.time(),
        }
    }

    /// Admissible estimate of the remaining cost from `from` to `goal`.
    pub fn heuristic(&self, from: &Stop, goal: &Stop) -> f64 {
        let distance = from.distance_to(goal);
        match self.metric {
            CostMetric::Distance => distance,
            CostMetric::Time => distance / self.max_vehicle_speed_mps,
        }
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            metric: CostMetric::Distance,
            // No scheduled mode in a city-scale network runs faster.
            max_vehicle_speed_mps: 30.0,
        }
    }
}
