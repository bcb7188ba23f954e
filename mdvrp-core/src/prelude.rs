//! This module reimports a common used types.

pub use crate::Pipeline;
pub use crate::TickSolution;

pub use crate::models::common::{Distance, Float, Point, distance};
pub use crate::models::problem::{Node, NodeId, NodeKind, Snapshot};
pub use crate::models::solution::{Assignment, Cluster, Leg, Tour};

pub use crate::utils::Environment;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::RoutingError;
pub use crate::utils::RoutingWarning;
