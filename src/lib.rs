//! annocache - cached annotation lookups
//!
//! Resolves "which annotations of kind `T` does this type, field, property,
//! or method carry" once per (kind, entity) pair and serves every later
//! query from memory.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): entity model, dispatch ladder, `Introspector` port
//! - **Adapters** (`adapters`): the moka-backed `AnnotationCache` and an
//!   in-memory `AnnotationRegistry` introspector
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use annocache::{Annotation, AnnotationCache, AnnotationRegistry, MemberHandle, Subject};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Marker(&'static str);
//! impl Annotation for Marker {}
//!
//! struct Foo;
//!
//! let registry = AnnotationRegistry::builder()
//!     .on_method::<Foo, _>("bar", Marker("x"))
//!     .build();
//! let cache = AnnotationCache::new(Arc::new(registry));
//!
//! let bar = MemberHandle::method::<Foo>("bar");
//! let marker = cache.get_annotation::<Marker>(Subject::member(&bar)).unwrap();
//! assert_eq!(marker, Some(Marker("x")));
//! ```

pub mod adapters;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::cache::{AnnotationCache, CacheStats};
pub use adapters::registry::{AnnotationRegistry, AnnotationRegistryBuilder};
pub use domain::errors::{AnnotationError, AnnotationResult};
pub use domain::models::{
    Annotation, CacheSettings, Config, Entity, ErasedAnnotation, LoggingConfig, MemberHandle,
    MemberKind, Reflect, Subject, TypeName,
};
pub use domain::ports::{Introspector, NullIntrospector};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::LoggerImpl;
