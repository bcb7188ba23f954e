//! Core crate contains the routing pipeline which is run once per simulation tick to serve shops
//! from a set of depots (*Multi-Depot Vehicle Routing Problem*).
//!
//! # Pipeline
//!
//! - **assignment**: every shop is assigned to its nearest depot, clusters are formed
//! - **export**: every cluster is materialized as a record with the depot in front
//! - **tour**: a visiting order is built per cluster using nearest neighbor heuristic
//! - **legs**: tours are converted into directed legs with carried quantity
//!
//! The pipeline is a greedy heuristic: no capacity, time windows or optimality guarantees are
//! considered.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/integration/properties_test.rs"]
mod properties_test;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod utils;

mod pipeline;
pub use self::pipeline::*;
