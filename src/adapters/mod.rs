//! Adapters around the domain ports.

pub mod cache;
pub mod registry;
