//! Partitions shops into depot clusters by nearest depot.

#[cfg(test)]
#[path = "../../tests/unit/construction/assignment_test.rs"]
mod assignment_test;

use crate::models::common::distance;
use crate::models::problem::{Node, Snapshot};
use crate::models::solution::{Assignment, Cluster};
use crate::utils::{RoutingError, compare_floats};
use std::cmp::Ordering;

/// Assigns every shop to its nearest depot. Ties are broken in favor of the depot which comes
/// first in snapshot enumeration order. Every depot gets a cluster, even an empty one.
pub fn assign_depots(snapshot: &Snapshot) -> Result<Assignment, RoutingError> {
    let depots = snapshot.depots().collect::<Vec<_>>();

    if depots.is_empty() {
        return Err(RoutingError::Configuration("no depot nodes present in snapshot".to_string()));
    }

    let mut clusters = depots
        .iter()
        .map(|depot| Cluster { depot_id: depot.id.clone(), shop_ids: Vec::default() })
        .collect::<Vec<_>>();

    snapshot.shops().for_each(|shop| {
        let depot_idx = find_nearest_depot(shop, depots.as_slice());
        clusters[depot_idx].shop_ids.push(shop.id.clone());
    });

    Ok(Assignment::new(clusters))
}

fn find_nearest_depot(shop: &Node, depots: &[&Node]) -> usize {
    depots
        .iter()
        .map(|depot| distance(&shop.location, &depot.location))
        .enumerate()
        .fold((0, f64::INFINITY), |(best_idx, best_distance), (idx, current)| {
            // NOTE strict comparison keeps the first encountered depot on ties
            match compare_floats(current, best_distance) {
                Ordering::Less => (idx, current),
                _ => (best_idx, best_distance),
            }
        })
        .0
}
