//! Type-safe enumerations: closed sets of named, identified singletons.

use crate::error::{DomainError, DomainResult};

/// A closed, compile-time-fixed set of `(id, name)` singletons.
///
/// Each implementing type declares its variants explicitly through
/// [`Enumeration::variants`] — usually via the [`enumeration!`] macro — and
/// lookups scan only that registry, never the variants of another type.
/// Equality, hashing and ordering are defined on `id` alone; comparing two
/// different enumeration types is a compile error.
pub trait Enumeration: Sized + core::fmt::Debug + 'static {
    /// Unique identifier of this variant within its type.
    fn id(&self) -> i32;

    /// Name of this variant.
    fn name(&self) -> &'static str;

    /// Every declared variant of this type, in declaration order.
    fn variants() -> &'static [&'static Self];

    /// The variant with the given id.
    fn from_id(id: i32) -> DomainResult<&'static Self> {
        Self::try_from_id(id).ok_or_else(|| {
            DomainError::validation(format!(
                "'{id}' is not a valid id for {}",
                core::any::type_name::<Self>()
            ))
        })
    }

    /// The variant with the given name.
    fn from_name(name: &str) -> DomainResult<&'static Self> {
        Self::try_from_name(name).ok_or_else(|| {
            DomainError::validation(format!(
                "'{name}' is not a valid name for {}",
                core::any::type_name::<Self>()
            ))
        })
    }

    fn try_from_id(id: i32) -> Option<&'static Self> {
        Self::variants().iter().copied().find(|v| v.id() == id)
    }

    fn try_from_name(name: &str) -> Option<&'static Self> {
        Self::variants().iter().copied().find(|v| v.name() == name)
    }
}

/// Declares an enumeration type: its singleton variants, the registry behind
/// [`Enumeration::variants`], and id-based equality, hashing and ordering.
///
/// ```
/// use groundwork_core::{Enumeration, enumeration};
///
/// enumeration! {
///     /// Lifecycle states of an order.
///     pub enum OrderStatus {
///         PENDING = (1, "Pending"),
///         SHIPPED = (2, "Shipped"),
///         CANCELLED = (3, "Cancelled"),
///     }
/// }
///
/// assert_eq!(OrderStatus::from_id(2).unwrap().name(), "Shipped");
/// assert_eq!(OrderStatus::try_from_name("Missing"), None);
/// assert!(OrderStatus::PENDING < OrderStatus::SHIPPED);
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = ($id:expr, $label:expr)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis struct $name {
            id: i32,
            name: &'static str,
        }

        impl $name {
            $(
                $(#[$vmeta])*
                $vis const $variant: $name = $name { id: $id, name: $label };
            )+
        }

        impl $crate::Enumeration for $name {
            fn id(&self) -> i32 {
                self.id
            }

            fn name(&self) -> &'static str {
                self.name
            }

            fn variants() -> &'static [&'static Self] {
                &[$(&$name::$variant),+]
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $name {}

        impl core::hash::Hash for $name {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash(&self.id, state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.id.cmp(&other.id)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name)
            }
        }
    };
}
