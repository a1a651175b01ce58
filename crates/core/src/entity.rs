//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A SKU keeps its identity (its label) while its base fields are edited; the
/// record store uses this to find the record an update or delete refers to.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
