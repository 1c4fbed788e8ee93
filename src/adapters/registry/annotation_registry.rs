//! Immutable registry of declared annotations.

use std::any::Any;
use std::borrow::Cow;
use std::collections::HashMap;

use tracing::debug;

use crate::domain::models::{Annotation, Entity, ErasedAnnotation, MemberKind, TypeName};
use crate::domain::ports::Introspector;

/// Annotation metadata keyed by entity.
///
/// Plays the part of the compiled-in metadata a reflective runtime would
/// carry: once built it never changes, which is what makes caching its
/// answers (including empty ones) sound.
#[derive(Debug, Clone, Default)]
pub struct AnnotationRegistry {
    entries: HashMap<Entity, Vec<ErasedAnnotation>>,
}

impl AnnotationRegistry {
    pub fn builder() -> AnnotationRegistryBuilder {
        AnnotationRegistryBuilder::default()
    }

    /// Number of entities carrying at least one annotation.
    pub fn entity_count(&self) -> usize {
        self.entries.len()
    }

    fn matching<'a>(
        &'a self,
        entity: &Entity,
        kind: &'a TypeName,
    ) -> impl Iterator<Item = &'a ErasedAnnotation> + 'a {
        self.entries
            .get(entity)
            .into_iter()
            .flatten()
            .filter(move |annotation| annotation.kind() == kind)
    }
}

impl Introspector for AnnotationRegistry {
    fn is_defined(&self, entity: &Entity, kind: &TypeName) -> bool {
        self.matching(entity, kind).next().is_some()
    }

    fn annotations(&self, entity: &Entity, kind: &TypeName) -> Vec<ErasedAnnotation> {
        self.matching(entity, kind).cloned().collect()
    }
}

/// Builder for [`AnnotationRegistry`].
///
/// Annotations are reported in the order they are declared here.
#[derive(Debug, Default)]
pub struct AnnotationRegistryBuilder {
    entries: HashMap<Entity, Vec<ErasedAnnotation>>,
}

impl AnnotationRegistryBuilder {
    /// Annotate the type `T` itself.
    pub fn on_type<T: ?Sized + Any, A: Annotation>(self, annotation: A) -> Self {
        self.on_entity(Entity::of_type(TypeName::of::<T>()), annotation)
    }

    /// Annotate field `name` of `T`.
    pub fn on_field<T: ?Sized + Any, A: Annotation>(
        self,
        name: impl Into<Cow<'static, str>>,
        annotation: A,
    ) -> Self {
        self.on_member::<T, A>(MemberKind::Field, name, annotation)
    }

    /// Annotate property `name` of `T`.
    pub fn on_property<T: ?Sized + Any, A: Annotation>(
        self,
        name: impl Into<Cow<'static, str>>,
        annotation: A,
    ) -> Self {
        self.on_member::<T, A>(MemberKind::Property, name, annotation)
    }

    /// Annotate method `name` of `T`.
    pub fn on_method<T: ?Sized + Any, A: Annotation>(
        self,
        name: impl Into<Cow<'static, str>>,
        annotation: A,
    ) -> Self {
        self.on_member::<T, A>(MemberKind::Method, name, annotation)
    }

    fn on_member<T: ?Sized + Any, A: Annotation>(
        self,
        kind: MemberKind,
        name: impl Into<Cow<'static, str>>,
        annotation: A,
    ) -> Self {
        self.on_entity(Entity::member(kind, TypeName::of::<T>(), name), annotation)
    }

    /// Annotate an arbitrary entity, for types known only by name.
    pub fn on_entity<A: Annotation>(mut self, entity: Entity, annotation: A) -> Self {
        self.entries
            .entry(entity)
            .or_default()
            .push(ErasedAnnotation::new(annotation));
        self
    }

    pub fn build(self) -> AnnotationRegistry {
        debug!(entities = self.entries.len(), "Built annotation registry");
        AnnotationRegistry {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Foo;

    #[derive(Debug, Clone, PartialEq)]
    struct Marker(&'static str);
    impl Annotation for Marker {}

    #[derive(Debug, Clone, PartialEq)]
    struct Obsolete;
    impl Annotation for Obsolete {}

    #[test]
    fn test_reports_in_declaration_order() {
        let registry = AnnotationRegistry::builder()
            .on_method::<Foo, _>("run", Marker("first"))
            .on_method::<Foo, _>("run", Obsolete)
            .on_method::<Foo, _>("run", Marker("second"))
            .build();

        let entity = Entity::member(MemberKind::Method, TypeName::of::<Foo>(), "run");
        let found: Vec<_> = registry
            .annotations(&entity, &Marker::kind())
            .iter()
            .filter_map(|a| a.downcast_ref::<Marker>().cloned())
            .collect();

        assert_eq!(found, vec![Marker("first"), Marker("second")]);
        assert_eq!(registry.annotations(&entity, &Obsolete::kind()).len(), 1);
        assert_eq!(registry.entity_count(), 1);
    }

    #[test]
    fn test_member_kinds_are_separate_entities() {
        let registry = AnnotationRegistry::builder()
            .on_field::<Foo, _>("id", Marker("field"))
            .build();

        let field = Entity::member(MemberKind::Field, TypeName::of::<Foo>(), "id");
        let property = Entity::member(MemberKind::Property, TypeName::of::<Foo>(), "id");

        assert!(registry.is_defined(&field, &Marker::kind()));
        assert!(!registry.is_defined(&property, &Marker::kind()));
        assert!(!registry.is_defined(&Entity::of_type(TypeName::of::<Foo>()), &Marker::kind()));
    }

    #[test]
    fn test_kind_not_declared() {
        let registry = AnnotationRegistry::builder()
            .on_type::<Foo, _>(Marker("type"))
            .build();

        let entity = Entity::of_type(TypeName::of::<Foo>());
        assert!(!registry.is_defined(&entity, &Obsolete::kind()));
        assert!(registry.annotations(&entity, &Obsolete::kind()).is_empty());
    }
}
