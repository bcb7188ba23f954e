//! A command line interface library for the multi-depot tick router: csv/json formats, json
//! configuration and a tick simulation which drives the routing pipeline.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/features/simulate_test.rs"]
mod simulate_feature_test;

pub use mdvrp_core as core;

pub mod extensions;
