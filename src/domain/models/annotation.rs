//! Annotation kinds and their type-erased instances.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::entity::TypeName;

/// A kind of annotation that can be attached to types and members.
///
/// The kind is identified by the implementing type's fully qualified name.
///
/// ```
/// use annocache::Annotation;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Marker(&'static str);
///
/// impl Annotation for Marker {}
///
/// assert!(Marker::kind().as_str().ends_with("Marker"));
/// ```
pub trait Annotation: Any + Clone + Send + Sync + fmt::Debug {
    fn kind() -> TypeName {
        TypeName::of::<Self>()
    }
}

/// An annotation instance with its concrete type erased.
///
/// This is what introspectors hand back; the cache downcasts to the
/// requested kind.
#[derive(Clone)]
pub struct ErasedAnnotation {
    kind: TypeName,
    value: Arc<dyn Any + Send + Sync>,
}

impl ErasedAnnotation {
    pub fn new<A: Annotation>(annotation: A) -> Self {
        Self {
            kind: A::kind(),
            value: Arc::new(annotation),
        }
    }

    pub fn kind(&self) -> &TypeName {
        &self.kind
    }

    pub fn is<A: Annotation>(&self) -> bool {
        self.value.is::<A>()
    }

    pub fn downcast_ref<A: Annotation>(&self) -> Option<&A> {
        self.value.downcast_ref::<A>()
    }
}

impl fmt::Debug for ErasedAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedAnnotation")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Marker(&'static str);
    impl Annotation for Marker {}

    #[derive(Debug, Clone, PartialEq)]
    struct Obsolete;
    impl Annotation for Obsolete {}

    #[test]
    fn test_erased_keeps_kind_and_value() {
        let erased = ErasedAnnotation::new(Marker("x"));

        assert_eq!(erased.kind(), &Marker::kind());
        assert!(erased.is::<Marker>());
        assert!(!erased.is::<Obsolete>());
        assert_eq!(erased.downcast_ref::<Marker>(), Some(&Marker("x")));
        assert_eq!(erased.downcast_ref::<Obsolete>(), None);
    }
}
