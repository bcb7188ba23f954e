//! Contains extensions around the core routing pipeline.

pub mod formats;
pub mod simulate;
