//! Entity identity: type names, member handles, and resolved entities.

use std::any::{type_name, Any};
use std::borrow::Cow;
use std::fmt;

/// Fully qualified name of a Rust type.
///
/// Names come from [`std::any::type_name`], so they carry the full module
/// path (`my_crate::models::Foo`). Used for annotation kinds and declaring
/// types alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName(Cow<'static, str>);

impl TypeName {
    /// Name of the type `T`.
    pub fn of<T: ?Sized + Any>() -> Self {
        Self(Cow::Borrowed(type_name::<T>()))
    }

    /// Build a name from an arbitrary string, for entities that have no
    /// Rust type behind them (generated or foreign types).
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of member a handle points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
    Method,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field => write!(f, "field"),
            Self::Property => write!(f, "property"),
            Self::Method => write!(f, "method"),
        }
    }
}

/// Handle to a field, property, or method declared on a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberHandle {
    kind: MemberKind,
    declaring_type: TypeName,
    name: Cow<'static, str>,
}

impl MemberHandle {
    pub fn new(
        kind: MemberKind,
        declaring_type: TypeName,
        name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            declaring_type,
            name: name.into(),
        }
    }

    /// Handle to field `name` of `T`.
    pub fn field<T: ?Sized + Any>(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(MemberKind::Field, TypeName::of::<T>(), name)
    }

    /// Handle to property `name` of `T`.
    pub fn property<T: ?Sized + Any>(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(MemberKind::Property, TypeName::of::<T>(), name)
    }

    /// Handle to method `name` of `T`.
    pub fn method<T: ?Sized + Any>(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(MemberKind::Method, TypeName::of::<T>(), name)
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn declaring_type(&self) -> &TypeName {
        &self.declaring_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entity this handle refers to.
    pub fn entity(&self) -> Entity {
        Entity::member(self.kind, self.declaring_type.clone(), self.name.clone())
    }
}

/// A member component of an [`Entity`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    pub kind: MemberKind,
    pub name: Cow<'static, str>,
}

/// Something annotations can be attached to: a type, or a member of one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    declaring_type: TypeName,
    member: Option<Member>,
}

impl Entity {
    /// The type itself.
    pub fn of_type(declaring_type: TypeName) -> Self {
        Self {
            declaring_type,
            member: None,
        }
    }

    pub fn member(
        kind: MemberKind,
        declaring_type: TypeName,
        name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            declaring_type,
            member: Some(Member {
                kind,
                name: name.into(),
            }),
        }
    }

    pub fn declaring_type(&self) -> &TypeName {
        &self.declaring_type
    }

    pub fn member_ref(&self) -> Option<&Member> {
        self.member.as_ref()
    }

    pub fn is_type(&self) -> bool {
        self.member.is_none()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(member) => write!(f, "{} {}::{}", member.kind, self.declaring_type, member.name),
            None => write!(f, "type {}", self.declaring_type),
        }
    }
}

/// Runtime type lookup for bare instances.
///
/// Implemented for every `'static` type, so any value can be passed as an
/// instance subject. The reported name is the concrete type behind the
/// reference: `&Box<Foo>` reports `Box<Foo>`, not `Foo`.
pub trait Reflect: Any {
    fn runtime_type(&self) -> TypeName;
}

impl<T: Any> Reflect for T {
    fn runtime_type(&self) -> TypeName {
        TypeName::of::<T>()
    }
}
