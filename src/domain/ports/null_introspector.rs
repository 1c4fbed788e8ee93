//! Null introspector implementation.
//!
//! Used when no annotation metadata is available but the type system
//! requires an Introspector implementation.

use crate::domain::models::{Entity, ErasedAnnotation, TypeName};
use super::Introspector;

/// An introspector that reports no annotations for any entity.
#[derive(Debug, Clone, Default)]
pub struct NullIntrospector;

impl NullIntrospector {
    pub fn new() -> Self {
        Self
    }
}

impl Introspector for NullIntrospector {
    fn is_defined(&self, _entity: &Entity, _kind: &TypeName) -> bool {
        false
    }

    fn annotations(&self, _entity: &Entity, _kind: &TypeName) -> Vec<ErasedAnnotation> {
        Vec::new()
    }
}
