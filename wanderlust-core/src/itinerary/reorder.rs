//! Drag-to-reorder as a pure sequence operation.

/// Anything with a stable identity inside an ordered list.
pub trait Keyed {
    type Key: PartialEq;

    fn key(&self) -> &Self::Key;
}

/// Move the element keyed `from` to the position currently held by `to`.
///
/// The element is removed from its position and reinserted at the target
/// index; elements in between shift by one. Returns the input unchanged when
/// `from == to` or when either key is missing.
pub fn move_element<T: Keyed>(mut items: Vec<T>, from: &T::Key, to: &T::Key) -> Vec<T> {
    if from == to {
        return items;
    }
    let Some(old_index) = items.iter().position(|i| i.key() == from) else {
        return items;
    };
    let Some(new_index) = items.iter().position(|i| i.key() == to) else {
        return items;
    };
    let moved = items.remove(old_index);
    items.insert(new_index, moved);
    items
}
