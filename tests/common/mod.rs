//! Common test utilities for integration tests
//!
//! Provides fixture annotations, a call-counting introspector, and
//! test logging setup shared across integration test files.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use annocache::{
    Annotation, AnnotationRegistry, Entity, ErasedAnnotation, Introspector, TypeName,
};

/// Annotation carrying a string payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker(pub &'static str);

impl Annotation for Marker {}

/// Payload-free annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obsolete;

impl Annotation for Obsolete {}

/// Fixture type with annotations on itself and its members
pub struct Foo;

/// Second fixture type sharing member names with `Foo`
pub struct Baz;

/// Introspector wrapper that counts calls into the wrapped one
pub struct CountingIntrospector<I> {
    inner: I,
    is_defined_calls: AtomicUsize,
    annotations_calls: AtomicUsize,
}

impl<I: Introspector> CountingIntrospector<I> {
    pub fn new(inner: I) -> Arc<Self> {
        Arc::new(Self {
            inner,
            is_defined_calls: AtomicUsize::new(0),
            annotations_calls: AtomicUsize::new(0),
        })
    }

    /// Number of `is_defined` calls, i.e. number of resolutions
    pub fn lookups(&self) -> usize {
        self.is_defined_calls.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn fetches(&self) -> usize {
        self.annotations_calls.load(Ordering::SeqCst)
    }
}

impl<I: Introspector> Introspector for CountingIntrospector<I> {
    fn is_defined(&self, entity: &Entity, kind: &TypeName) -> bool {
        self.is_defined_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.is_defined(entity, kind)
    }

    fn annotations(&self, entity: &Entity, kind: &TypeName) -> Vec<ErasedAnnotation> {
        self.annotations_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.annotations(entity, kind)
    }
}

/// Registry used by most tests:
///
/// - `Foo` itself: `Marker("type")`
/// - field `Foo.id`: `Marker("field")`
/// - property `Foo.name`: `Marker("property")`, `Marker("property-2")`
/// - method `Foo.bar`: `Marker("x")`, `Obsolete`
/// - method `Baz.bar`: `Marker("baz")`
pub fn fixture_registry() -> AnnotationRegistry {
    AnnotationRegistry::builder()
        .on_type::<Foo, _>(Marker("type"))
        .on_field::<Foo, _>("id", Marker("field"))
        .on_property::<Foo, _>("name", Marker("property"))
        .on_property::<Foo, _>("name", Marker("property-2"))
        .on_method::<Foo, _>("bar", Marker("x"))
        .on_method::<Foo, _>("bar", Obsolete)
        .on_method::<Baz, _>("bar", Marker("baz"))
        .build()
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
