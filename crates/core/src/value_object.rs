//! Value object trait: equality by value, not identity.

/// Marker trait for immutable values compared by their contents.
///
/// `Price { cents: 8999 }` is a value object; a `Product` with an id is an
/// entity. To "change" a value object, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
