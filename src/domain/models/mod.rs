//! Domain models: entities, subjects, annotations, configuration.

pub mod annotation;
pub mod config;
pub mod entity;
pub mod subject;

pub use annotation::{Annotation, ErasedAnnotation};
pub use config::{CacheSettings, Config, LoggingConfig};
pub use entity::{Entity, Member, MemberHandle, MemberKind, Reflect, TypeName};
pub use subject::{cache_key, DispatchState, Subject};
