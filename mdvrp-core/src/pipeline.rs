#[cfg(test)]
#[path = "../tests/unit/pipeline_test.rs"]
mod pipeline_test;

use crate::construction::assignment::assign_depots;
use crate::construction::export::export_clusters;
use crate::construction::legs::aggregate_legs;
use crate::construction::tour::build_tour;
use crate::models::common::Distance;
use crate::models::problem::Snapshot;
use crate::models::solution::{Assignment, Leg, Tour};
use crate::utils::{Environment, RoutingError, RoutingWarning, Timer};
use std::sync::Arc;

/// A routing result for one tick.
#[derive(Clone, Debug)]
pub struct TickSolution {
    /// Shops partitioned into depot clusters.
    pub assignment: Assignment,
    /// Tours in cluster processing order.
    pub tours: Vec<Tour>,
    /// Leg table ordered by route then leg.
    pub legs: Vec<Leg>,
    /// Non-fatal issues found while routing.
    pub warnings: Vec<RoutingWarning>,
}

impl TickSolution {
    /// Returns total length of all closed tours or `None` if some tour node is not in the snapshot.
    pub fn total_distance(&self, snapshot: &Snapshot) -> Option<Distance> {
        self.tours.iter().map(|tour| tour.distance(snapshot)).sum()
    }
}

/// Runs depot assignment, cluster export, tour building and leg aggregation for a snapshot.
/// Keeps no state between runs: the same snapshot always produces the same solution.
pub struct Pipeline {
    environment: Arc<Environment>,
}

impl Pipeline {
    /// Creates a new instance of `Pipeline`.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment }
    }

    /// Routes the snapshot. Either a complete solution is returned or an error, never a partial one.
    pub fn run(&self, snapshot: &Snapshot) -> Result<TickSolution, RoutingError> {
        let logger = self.environment.logger.as_ref();
        let timer = Timer::start();

        let assignment = Timer::measure_duration_with_callback(
            || assign_depots(snapshot),
            |duration| logger(format!("depot assignment done in {}ms", duration.as_millis()).as_str()),
        )?;

        let records = export_clusters(snapshot, &assignment)?;

        let warnings = records
            .iter()
            .filter(|record| record.shops().is_empty())
            .map(|record| RoutingWarning::DegenerateCluster { depot_id: record.depot().id.clone() })
            .collect::<Vec<_>>();
        warnings.iter().for_each(|warning| logger(format!("warning: {warning}").as_str()));

        let tours = Timer::measure_duration_with_callback(
            || records.iter().map(build_tour).collect::<Vec<_>>(),
            |duration| logger(format!("{} tours built in {}ms", records.len(), duration.as_millis()).as_str()),
        );

        let legs = aggregate_legs(tours.as_slice(), snapshot)?;

        logger(
            format!(
                "snapshot routed: {} depots, {} shops, {} legs in {}ms",
                tours.len(),
                assignment.shops(),
                legs.len(),
                timer.elapsed_millis()
            )
            .as_str(),
        );

        Ok(TickSolution { assignment, tours, legs, warnings })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Arc::new(Environment::default()))
    }
}
