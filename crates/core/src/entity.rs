//! Entity trait: records that are told apart by identifier, not by value.

/// A record with a stable identifier for the lifetime of the session.
///
/// Catalog products and listing drafts are entities; prices and ratings are
/// value objects (see [`crate::ValueObject`]).
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
