//! Domain layer for annocache
//!
//! This module contains the entity model, the dispatch ladder, and the
//! introspection port.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{AnnotationError, AnnotationResult};
