//! Query subjects and the dispatch ladder that resolves them to entities.

use std::any::Any;
use std::fmt;

use super::entity::{Entity, MemberHandle, MemberKind, Reflect, TypeName};
use crate::domain::errors::{AnnotationError, AnnotationResult};

/// What an annotation lookup is asked about.
#[derive(Clone, Copy)]
pub enum Subject<'a> {
    /// A field, property, or method handle.
    Member(&'a MemberHandle),
    /// A bare value, inspected through its runtime type. `None` is the
    /// absent handle and fails resolution.
    Instance(Option<&'a dyn Reflect>),
}

impl<'a> Subject<'a> {
    /// A bare value. A `MemberHandle` passed here is still treated as a
    /// member, so the ladder's member states keep precedence.
    pub fn instance<T: Reflect>(value: &'a T) -> Self {
        let any: &'a dyn Any = value;
        match any.downcast_ref::<MemberHandle>() {
            Some(handle) => Self::Member(handle),
            None => Self::Instance(Some(value)),
        }
    }

    pub fn member(handle: &'a MemberHandle) -> Self {
        Self::Member(handle)
    }

    /// Resolve to the most specific entity, walking the ladder in order.
    pub fn resolve(&self) -> AnnotationResult<Entity> {
        let mut state = Some(DispatchState::CheckField);
        while let Some(current) = state {
            if let Some(resolved) = current.try_resolve(self) {
                return resolved;
            }
            state = current.next();
        }
        DispatchState::resolve_as_type(self)
    }

    fn member_of_kind(&self, kind: MemberKind) -> Option<&'a MemberHandle> {
        match *self {
            Self::Member(handle) if handle.kind() == kind => Some(handle),
            _ => None,
        }
    }
}

impl<'a> From<&'a MemberHandle> for Subject<'a> {
    fn from(handle: &'a MemberHandle) -> Self {
        Self::Member(handle)
    }
}

impl fmt::Debug for Subject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Member(handle) => f.debug_tuple("Member").field(handle).finish(),
            Self::Instance(Some(value)) => f
                .debug_tuple("Instance")
                .field(&value.runtime_type())
                .finish(),
            Self::Instance(None) => f.write_str("Instance(None)"),
        }
    }
}

/// States of the dispatch ladder, entered in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    CheckField,
    CheckProperty,
    CheckMethod,
    ResolveAsType,
}

impl DispatchState {
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::CheckField => Some(Self::CheckProperty),
            Self::CheckProperty => Some(Self::CheckMethod),
            Self::CheckMethod => Some(Self::ResolveAsType),
            Self::ResolveAsType => None,
        }
    }

    /// `None` means the subject is not handled here and the ladder moves on.
    pub fn try_resolve(self, subject: &Subject<'_>) -> Option<AnnotationResult<Entity>> {
        match self {
            Self::CheckField => subject.member_of_kind(MemberKind::Field).map(|h| Ok(h.entity())),
            Self::CheckProperty => subject
                .member_of_kind(MemberKind::Property)
                .map(|h| Ok(h.entity())),
            Self::CheckMethod => subject.member_of_kind(MemberKind::Method).map(|h| Ok(h.entity())),
            Self::ResolveAsType => Some(Self::resolve_as_type(subject)),
        }
    }

    fn resolve_as_type(subject: &Subject<'_>) -> AnnotationResult<Entity> {
        match *subject {
            Subject::Instance(Some(value)) => Ok(Entity::of_type(value.runtime_type())),
            Subject::Instance(None) => Err(AnnotationError::AbsentSubject),
            // Member kinds are exhaustive, so a handle never gets here; if one
            // did, it would be inspected as a value like any other.
            Subject::Member(handle) => Ok(Entity::of_type(handle.runtime_type())),
        }
    }
}

/// Cache key: `"{kind} {declaring_type}"` plus `" {member_kind}:{name}"` for
/// members. A field and a method sharing a name get distinct keys.
pub fn cache_key(kind: &TypeName, entity: &Entity) -> String {
    match entity.member_ref() {
        Some(member) => format!(
            "{} {} {}:{}",
            kind,
            entity.declaring_type(),
            member.kind,
            member.name
        ),
        None => format!("{} {}", kind, entity.declaring_type()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Foo;
    struct Bar;
    struct Marker;

    #[test]
    fn test_member_handles_resolve_to_members() {
        for handle in [
            MemberHandle::field::<Foo>("a"),
            MemberHandle::property::<Foo>("a"),
            MemberHandle::method::<Foo>("a"),
        ] {
            let entity = Subject::member(&handle).resolve().unwrap();
            assert_eq!(entity, handle.entity());
        }
    }

    #[test]
    fn test_instance_resolves_to_runtime_type() {
        let foo = Foo;
        let entity = Subject::instance(&foo).resolve().unwrap();
        assert_eq!(entity, Entity::of_type(TypeName::of::<Foo>()));
    }

    #[test]
    fn test_member_handle_as_instance_stays_member() {
        let handle = MemberHandle::field::<Foo>("id");
        let entity = Subject::instance(&handle).resolve().unwrap();
        assert_eq!(entity, handle.entity());
        assert!(matches!(Subject::instance(&handle), Subject::Member(_)));
    }

    #[test]
    fn test_absent_instance_fails() {
        let result = Subject::Instance(None).resolve();
        assert_eq!(result, Err(AnnotationError::AbsentSubject));
    }

    #[test]
    fn test_ladder_order() {
        let mut visited = vec![DispatchState::CheckField];
        while let Some(next) = visited.last().and_then(|s| s.next()) {
            visited.push(next);
        }
        assert_eq!(
            visited,
            vec![
                DispatchState::CheckField,
                DispatchState::CheckProperty,
                DispatchState::CheckMethod,
                DispatchState::ResolveAsType,
            ]
        );
    }

    #[test]
    fn test_field_state_skips_method_handle() {
        let handle = MemberHandle::method::<Foo>("run");
        let subject = Subject::member(&handle);
        assert!(DispatchState::CheckField.try_resolve(&subject).is_none());
        assert!(DispatchState::CheckProperty.try_resolve(&subject).is_none());
        assert!(DispatchState::CheckMethod.try_resolve(&subject).is_some());
    }

    #[test]
    fn test_cache_key_format() {
        let kind = TypeName::of::<Marker>();
        let member = MemberHandle::field::<Foo>("id").entity();
        let ty = Entity::of_type(TypeName::of::<Bar>());

        assert_eq!(
            cache_key(&kind, &member),
            format!("{} {} field:id", TypeName::of::<Marker>(), TypeName::of::<Foo>())
        );
        assert_ne!(
            cache_key(&kind, &member),
            cache_key(&kind, &MemberHandle::method::<Foo>("id").entity())
        );
        assert_eq!(
            cache_key(&kind, &ty),
            format!("{} {}", TypeName::of::<Marker>(), TypeName::of::<Bar>())
        );
    }
}
