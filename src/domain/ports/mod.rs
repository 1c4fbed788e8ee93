//! Port trait definitions (Hexagonal Architecture)
//!
//! - Introspector: annotation metadata lookups for types and members
//!
//! The cache depends only on these contracts, never on a concrete
//! metadata source.

pub mod introspector;
pub mod null_introspector;

pub use introspector::Introspector;
pub use null_introspector::NullIntrospector;
