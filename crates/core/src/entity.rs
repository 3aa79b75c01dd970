//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities are loaded from and saved to the host's persistence layer; two
/// entities are the same record when their identifiers are equal, whatever
/// their other fields hold.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
