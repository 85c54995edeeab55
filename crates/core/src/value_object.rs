//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two instances
/// with the same attributes are interchangeable. To "modify" one, construct a
/// new one. Quantities, metadata values, and journal entries are value
/// objects; an inventory record is not (it has identity: its key).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
