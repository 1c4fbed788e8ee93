//! In-memory caching layer for annotation lookups.
//!
//! Uses `moka` for concurrent get-or-compute caching in front of the
//! `Introspector` port.

pub mod annotation_cache;

pub use annotation_cache::{AnnotationCache, CacheStats};
