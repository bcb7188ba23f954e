//! Builds a visiting order per cluster using nearest neighbor heuristic.

#[cfg(test)]
#[path = "../../tests/unit/construction/tour_test.rs"]
mod tour_test;

use crate::construction::export::{ClusterRecord, RecordEntry};
use crate::models::common::{Point, distance};
use crate::models::solution::Tour;
use crate::utils::compare_floats;

/// Builds a tour greedily: starting from the depot, repeatedly moves to the nearest unvisited
/// shop (ties: first in record order). No improvement or feasibility checks are applied, so total
/// demand of the tour can exceed the depot's stock.
pub fn build_tour(record: &ClusterRecord) -> Tour {
    let depot = record.depot();
    let mut unvisited = record.shops().iter().collect::<Vec<_>>();
    let mut tour = Tour::new(depot.id.clone());
    let mut current = &depot.location;

    while let Some(idx) = find_nearest(current, unvisited.as_slice()) {
        let next = unvisited.remove(idx);
        tour.push(next.id.clone());
        current = &next.location;
    }

    tour
}

fn find_nearest(current: &Point, candidates: &[&RecordEntry]) -> Option<usize> {
    // NOTE min_by returns the first element among equal ones
    candidates
        .iter()
        .map(|entry| distance(current, &entry.location))
        .enumerate()
        .min_by(|(_, a), (_, b)| compare_floats(*a, *b))
        .map(|(idx, _)| idx)
}
