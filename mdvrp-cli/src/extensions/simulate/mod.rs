//! A tick simulation which generates node states and drives the routing pipeline once per tick.
//!
//! Every tick each node receives and dispatches a normally distributed amount of products. The
//! resulting net demand is routed by the pipeline while aggregated stock is tracked as a series.

mod config;
pub use self::config::*;

mod simulation;
pub use self::simulation::*;
