//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities are compared by identity, never by attribute values: two entities
/// of the same concrete type are equal iff their identifiers are equal. Two
/// entities of different concrete types are never comparable at all — the
/// type system enforces that stronger than any runtime check could.
///
/// Identifiers are assigned at construction and never change. There is no
/// nullable-id state; deserialization frameworks rebuild entities through
/// `serde` on the concrete type.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Implements `PartialEq`, `Eq` and `Hash` for an entity type from its
/// identifier alone.
///
/// A field-wise `#[derive(PartialEq)]` would break identity equality the
/// moment any non-key field differs, so entity types opt in explicitly:
///
/// ```
/// use groundwork_core::{Entity, entity_identity};
///
/// #[derive(Debug)]
/// struct Customer {
///     id: u64,
///     name: String,
/// }
///
/// impl Entity for Customer {
///     type Id = u64;
///     fn id(&self) -> &u64 {
///         &self.id
///     }
/// }
///
/// entity_identity!(Customer);
///
/// let a = Customer { id: 1, name: "Ada".to_string() };
/// let b = Customer { id: 1, name: "Grace".to_string() };
/// assert_eq!(a, b);
/// ```
#[macro_export]
macro_rules! entity_identity {
    ($entity:ty) => {
        impl PartialEq for $entity {
            fn eq(&self, other: &Self) -> bool {
                $crate::Entity::id(self) == $crate::Entity::id(other)
            }
        }

        impl Eq for $entity {}

        impl core::hash::Hash for $entity {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash($crate::Entity::id(self), state);
            }
        }
    };
}
