use crate::domain::models::{Entity, ErasedAnnotation, TypeName};

/// Port for annotation metadata lookups following hexagonal architecture
///
/// The cache calls into an introspector on every miss. Implementations
/// report only annotations declared directly on the entity; nothing is
/// inherited from base types or overridden members.
///
/// # Examples
///
/// ```no_run
/// use annocache::domain::models::{Entity, TypeName};
/// use annocache::domain::ports::Introspector;
///
/// fn count(introspector: &dyn Introspector, entity: &Entity, kind: &TypeName) -> usize {
///     if introspector.is_defined(entity, kind) {
///         introspector.annotations(entity, kind).len()
///     } else {
///         0
///     }
/// }
/// ```
pub trait Introspector: Send + Sync {
    /// Whether `entity` carries at least one annotation of `kind`.
    fn is_defined(&self, entity: &Entity, kind: &TypeName) -> bool;

    /// Annotations of `kind` on `entity`, in declaration order.
    ///
    /// Returns an empty vector when none are declared.
    fn annotations(&self, entity: &Entity, kind: &TypeName) -> Vec<ErasedAnnotation>;
}

impl<I: Introspector + ?Sized> Introspector for std::sync::Arc<I> {
    fn is_defined(&self, entity: &Entity, kind: &TypeName) -> bool {
        (**self).is_defined(entity, kind)
    }

    fn annotations(&self, entity: &Entity, kind: &TypeName) -> Vec<ErasedAnnotation> {
        (**self).annotations(entity, kind)
    }
}
