//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for everything kept in a collection.
//! Collections are keyed by the entity's id; ids are compared by equality only.

/// Core trait for collection entries
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}
