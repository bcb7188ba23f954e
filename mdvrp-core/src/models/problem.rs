//! Problem models: a tick snapshot of depot and shop states.

#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::common::{Distance, Float, Point, distance};
use crate::utils::RoutingError;
use rustc_hash::FxHashMap;

/// A stable node identifier.
pub type NodeId = String;

/// Specifies a node role in the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A depot which serves shops.
    Depot,
    /// A shop which is served by a depot.
    Shop,
}

/// Represents a node state for one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// A unique node id, stable across ticks.
    pub id: NodeId,
    /// A node kind.
    pub kind: NodeKind,
    /// A node position: metadata only, never used as a lookup key.
    pub location: Point,
    /// Current stock.
    pub stock: Float,
    /// Net demand for the tick: positive value means net consumption.
    pub demand: Float,
}

impl Node {
    /// Creates a new instance of `Node`.
    pub fn new(id: impl Into<NodeId>, kind: NodeKind, location: Point, stock: Float, demand: Float) -> Self {
        Self { id: id.into(), kind, location, stock, demand }
    }

    /// Returns true if node is a depot.
    pub fn is_depot(&self) -> bool {
        matches!(self.kind, NodeKind::Depot)
    }

    /// Returns true if node is a shop.
    pub fn is_shop(&self) -> bool {
        matches!(self.kind, NodeKind::Shop)
    }
}

/// A complete set of node states for one tick. Nodes keep their enumeration order which
/// is used for deterministic tie breaking.
#[derive(Clone, Debug)]
pub struct Snapshot {
    nodes: Vec<Node>,
    index: FxHashMap<NodeId, usize>,
}

impl Snapshot {
    /// Creates a new snapshot, validating node ids and values.
    pub fn new(nodes: Vec<Node>) -> Result<Self, RoutingError> {
        let mut index = FxHashMap::default();
        index.reserve(nodes.len());

        for (idx, node) in nodes.iter().enumerate() {
            validate_node(node)?;

            if index.insert(node.id.clone(), idx).is_some() {
                return Err(RoutingError::MalformedSnapshot(format!("duplicate node id: '{}'", node.id)));
            }
        }

        Ok(Self { nodes, index })
    }

    /// Returns all nodes in enumeration order.
    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_slice()
    }

    /// Returns depots in enumeration order.
    pub fn depots(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|node| node.is_depot())
    }

    /// Returns shops in enumeration order.
    pub fn shops(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|node| node.is_shop())
    }

    /// Returns node by its id.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Returns distance between two nodes specified by their ids.
    pub fn distance(&self, from: &str, to: &str) -> Option<Distance> {
        match (self.get(from), self.get(to)) {
            (Some(from), Some(to)) => Some(distance(&from.location, &to.location)),
            _ => None,
        }
    }

    /// Returns aggregated stock over all nodes.
    pub fn total_stock(&self) -> Float {
        self.nodes.iter().map(|node| node.stock).sum()
    }

    /// Returns total amount of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if snapshot has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn validate_node(node: &Node) -> Result<(), RoutingError> {
    if node.id.trim().is_empty() {
        return Err(RoutingError::MalformedSnapshot("node id is empty".to_string()));
    }

    if !node.location.is_finite() {
        return Err(RoutingError::MalformedSnapshot(format!("node '{}' has non-finite position", node.id)));
    }

    if !node.stock.is_finite() || !node.demand.is_finite() {
        return Err(RoutingError::MalformedSnapshot(format!("node '{}' has non-finite stock or demand", node.id)));
    }

    Ok(())
}

/// A pairwise cost between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct CostEntry {
    /// Origin node id.
    pub origin_id: NodeId,
    /// Destination node id.
    pub dest_id: NodeId,
    /// Euclidean distance between nodes.
    pub cost: Distance,
    /// Whether arc can be used. Reserved for arc-disabling policies, always true now.
    pub active: bool,
}

/// Creates cost table for every ordered pair of distinct nodes in snapshot order.
pub fn create_cost_table(snapshot: &Snapshot) -> Vec<CostEntry> {
    let nodes = snapshot.nodes();

    nodes
        .iter()
        .flat_map(|origin| {
            nodes.iter().filter(move |dest| dest.id != origin.id).map(move |dest| CostEntry {
                origin_id: origin.id.clone(),
                dest_id: dest.id.clone(),
                cost: distance(&origin.location, &dest.location),
                active: true,
            })
        })
        .collect()
}
