//! Contains building blocks of the routing pipeline.

pub mod assignment;
pub mod export;
pub mod legs;
pub mod tour;
