//! Solution models: clusters, tours and legs produced within one tick.

#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::common::{Distance, Float};
use crate::models::problem::{NodeId, Snapshot};
use rustc_hash::FxHashMap;

/// Shops assigned to one depot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cluster {
    /// A depot id.
    pub depot_id: NodeId,
    /// Assigned shop ids in snapshot enumeration order.
    pub shop_ids: Vec<NodeId>,
}

impl Cluster {
    /// Returns true if no shop is assigned to the depot.
    pub fn is_empty(&self) -> bool {
        self.shop_ids.is_empty()
    }
}

/// A partition of shops into depot clusters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    clusters: Vec<Cluster>,
    depots: FxHashMap<NodeId, NodeId>,
}

impl Assignment {
    /// Creates a new assignment from clusters. Clusters are expected to be disjoint.
    pub fn new(clusters: Vec<Cluster>) -> Self {
        let depots = clusters
            .iter()
            .flat_map(|cluster| cluster.shop_ids.iter().map(|shop_id| (shop_id.clone(), cluster.depot_id.clone())))
            .collect();

        Self { clusters, depots }
    }

    /// Returns clusters in depot enumeration order.
    pub fn clusters(&self) -> &[Cluster] {
        self.clusters.as_slice()
    }

    /// Returns depot id which serves the given shop.
    pub fn get_depot(&self, shop_id: &str) -> Option<&NodeId> {
        self.depots.get(shop_id)
    }

    /// Returns `(depot id, shop id)` pairs in cluster order.
    pub fn pairs(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> + '_ {
        self.clusters.iter().flat_map(|cluster| cluster.shop_ids.iter().map(move |shop_id| (&cluster.depot_id, shop_id)))
    }

    /// Returns total amount of assigned shops.
    pub fn shops(&self) -> usize {
        self.depots.len()
    }
}

/// A depot anchored visiting order. The closing return to depot is not stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    nodes: Vec<NodeId>,
}

impl Tour {
    /// Creates a new tour which starts at the given depot.
    pub fn new(depot_id: NodeId) -> Self {
        Self { nodes: vec![depot_id] }
    }

    /// Appends a shop to the end of the tour.
    pub fn push(&mut self, shop_id: NodeId) {
        self.nodes.push(shop_id);
    }

    /// Returns owning depot id.
    pub fn depot(&self) -> &NodeId {
        &self.nodes[0]
    }

    /// Returns visited shop ids in visiting order.
    pub fn shops(&self) -> &[NodeId] {
        &self.nodes[1..]
    }

    /// Returns all node ids starting from the depot.
    pub fn nodes(&self) -> &[NodeId] {
        self.nodes.as_slice()
    }

    /// Returns total amount of nodes in the tour including the depot.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if tour has no shops.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Returns length of the closed walk (including return to depot) or `None` if tour
    /// refers to node which is not present in the snapshot.
    pub fn distance(&self, snapshot: &Snapshot) -> Option<Distance> {
        self.nodes
            .iter()
            .zip(self.nodes.iter().skip(1).chain(std::iter::once(self.depot())))
            .try_fold(0., |acc, (from, to)| snapshot.distance(from, to).map(|distance| acc + distance))
    }
}

/// One directed arc of a route with its carried quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct Leg {
    /// Route id, starts from 1.
    pub route_id: usize,
    /// Leg id within the route, starts from 1.
    pub leg_id: usize,
    /// Origin node id.
    pub origin_id: NodeId,
    /// Destination node id.
    pub dest_id: NodeId,
    /// Carried quantity: destination's tick demand or zero for the closing leg.
    pub quantity: Float,
}
