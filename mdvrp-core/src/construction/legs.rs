//! Converts tours into directed legs with carried quantity.

#[cfg(test)]
#[path = "../../tests/unit/construction/legs_test.rs"]
mod legs_test;

use crate::models::problem::Snapshot;
use crate::models::solution::{Leg, Tour};
use crate::utils::RoutingError;

/// Aggregates tours into an ordered leg table. Routes are numbered from 1 in tour order, legs
/// are numbered from 1 within each route. Every route ends with a closing leg back to the depot
/// with zero quantity.
///
/// Leg quantity is the destination's raw tick demand: demand delivered earlier within the same
/// route is not subtracted.
pub fn aggregate_legs(tours: &[Tour], snapshot: &Snapshot) -> Result<Vec<Leg>, RoutingError> {
    let capacity = tours.iter().map(|tour| tour.len()).sum();

    tours.iter().zip(1..).try_fold(Vec::with_capacity(capacity), |mut legs, (tour, route_id)| {
        let nodes = tour.nodes();

        let mut leg_id = 0;
        for (origin_id, dest_id) in nodes.iter().zip(nodes.iter().skip(1)) {
            let dest = snapshot
                .get(dest_id)
                .ok_or_else(|| RoutingError::MalformedSnapshot(format!("cannot find node '{dest_id}' in snapshot")))?;

            leg_id += 1;
            legs.push(Leg {
                route_id,
                leg_id,
                origin_id: origin_id.clone(),
                dest_id: dest_id.clone(),
                quantity: dest.demand,
            });
        }

        let last_id = nodes.last().unwrap_or_else(|| tour.depot());
        legs.push(Leg {
            route_id,
            leg_id: leg_id + 1,
            origin_id: last_id.clone(),
            dest_id: tour.depot().clone(),
            quantity: 0.,
        });

        Ok(legs)
    })
}
