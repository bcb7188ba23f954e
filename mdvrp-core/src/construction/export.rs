//! Materializes clusters as records consumed by tour building.

#[cfg(test)]
#[path = "../../tests/unit/construction/export_test.rs"]
mod export_test;

use crate::models::common::{Float, Point};
use crate::models::problem::{NodeId, Snapshot};
use crate::models::solution::Assignment;
use crate::utils::RoutingError;

/// A node entry of the cluster record.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordEntry {
    /// Node id.
    pub id: NodeId,
    /// Node position.
    pub location: Point,
    /// Tick demand, always zero for the depot.
    pub demand: Float,
}

/// An ordered record of one cluster: depot first, then assigned shops.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterRecord {
    entries: Vec<RecordEntry>,
}

impl ClusterRecord {
    /// Creates a new record from depot and shop entries. Depot demand is forced to zero.
    pub fn new(depot: RecordEntry, shops: Vec<RecordEntry>) -> Self {
        let mut entries = Vec::with_capacity(shops.len() + 1);
        entries.push(RecordEntry { demand: 0., ..depot });
        entries.extend(shops);

        Self { entries }
    }

    /// Returns the depot entry.
    pub fn depot(&self) -> &RecordEntry {
        &self.entries[0]
    }

    /// Returns shop entries in record order.
    pub fn shops(&self) -> &[RecordEntry] {
        &self.entries[1..]
    }

    /// Returns all entries, depot first.
    pub fn entries(&self) -> &[RecordEntry] {
        self.entries.as_slice()
    }
}

/// Exports every cluster of the assignment, including clusters without shops, in cluster order.
pub fn export_clusters(snapshot: &Snapshot, assignment: &Assignment) -> Result<Vec<ClusterRecord>, RoutingError> {
    let get_entry = |id: &NodeId| {
        snapshot
            .get(id)
            .map(|node| RecordEntry { id: node.id.clone(), location: node.location.clone(), demand: node.demand })
            .ok_or_else(|| RoutingError::MalformedSnapshot(format!("cannot find node '{id}' in snapshot")))
    };

    assignment
        .clusters()
        .iter()
        .map(|cluster| {
            let depot = get_entry(&cluster.depot_id)?;
            let shops = cluster.shop_ids.iter().map(get_entry).collect::<Result<Vec<_>, _>>()?;

            Ok::<_, RoutingError>(ClusterRecord::new(depot, shops))
        })
        .collect()
}
