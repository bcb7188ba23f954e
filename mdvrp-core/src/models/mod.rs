//! A collection of models to represent a tick snapshot and its routing solution.

pub mod common;
pub mod problem;
pub mod solution;
