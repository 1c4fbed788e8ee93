//! In-memory annotation metadata.
//!
//! Declares annotations on types and members up front and serves them
//! through the `Introspector` port. Built once, immutable afterwards.

pub mod annotation_registry;

pub use annotation_registry::{AnnotationRegistry, AnnotationRegistryBuilder};
