//! Collection helpers applied once a source confirms a mutation.
//!
//! Each helper is a whole-collection transform keyed by id equality and
//! reports whether anything changed.

use crate::domain::Entity;

/// Append an entity, refusing ids that are already present
///
/// Returns the entity back on collision so the caller can report it.
pub fn insert<T: Entity>(items: &mut Vec<T>, entity: T) -> Result<(), T> {
    if contains(items, entity.id()) {
        return Err(entity);
    }
    items.push(entity);
    Ok(())
}

/// Apply `patch` to the entity with `id`, keeping its position
pub fn update_by_id<T, F>(items: &mut [T], id: &T::Id, patch: F) -> bool
where
    T: Entity,
    F: FnOnce(&mut T),
{
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            patch(item);
            true
        }
        None => false,
    }
}

/// Remove the first entity with `id`
pub fn remove_by_id<T: Entity>(items: &mut Vec<T>, id: &T::Id) -> Option<T> {
    let index = items.iter().position(|item| item.id() == id)?;
    Some(items.remove(index))
}

pub fn contains<T: Entity>(items: &[T], id: &T::Id) -> bool {
    items.iter().any(|item| item.id() == id)
}

pub fn find<'a, T: Entity>(items: &'a [T], id: &T::Id) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}
