//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two authors with the same names are equal)
/// - **Entity**: has identity (two books with the same ISBN are the same book)
///
/// Implementors must keep `Hash` consistent with `PartialEq` so they can be
/// used as set members and map keys.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Name {
///     first: String,
///     last: String,
/// }
///
/// impl ValueObject for Name {}
/// ```
pub trait ValueObject: Clone + PartialEq + Eq + core::hash::Hash + core::fmt::Debug {}
