use std::collections::BTreeMap;

use crate::sequence::Sequence;

/// Anything exposing a numeric `length` and index-addressed slots.
///
/// A slot is either present (`Some`) or a hole (`None`). Writing `None`
/// through [`ArrayLike::put`] deletes the slot, so existence checks stay
/// exact after every move.
pub trait ArrayLike {
    type Item;

    fn length(&self) -> usize;

    fn set_length(&mut self, length: usize);

    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Removes the value at `index`, leaving a hole behind.
    fn take(&mut self, index: usize) -> Option<Self::Item>;

    fn put(&mut self, index: usize, slot: Option<Self::Item>);

    #[inline]
    fn has(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    #[inline]
    fn set(&mut self, index: usize, value: Self::Item) {
        self.put(index, Some(value));
    }

    #[inline]
    fn delete(&mut self, index: usize) {
        self.put(index, None);
    }
}

impl<T> ArrayLike for Sequence<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn set_length(&mut self, length: usize) {
        self.slots_mut().resize_with(length, || None);
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.slots().get(index).and_then(Option::as_ref)
    }

    #[inline]
    fn take(&mut self, index: usize) -> Option<T> {
        self.slots_mut().get_mut(index).and_then(Option::take)
    }

    fn put(&mut self, index: usize, slot: Option<T>) {
        let slots = self.slots_mut();
        if index >= slots.len() {
            if slot.is_none() {
                return;
            }
            slots.resize_with(index + 1, || None);
        }
        slots[index] = slot;
    }
}

/// A plain object with integer keys and its own `length` property,
/// e.g. `{ length: 3, 2: 4 }`.
///
/// Unlike [`Sequence`], writing an index never moves `length`; only
/// [`ArrayLike::set_length`] does, and shrinking drops every key at or past
/// the new length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArrayLikeObject<T> {
    length: usize,
    entries: BTreeMap<usize, T>,
}

impl<T> ArrayLikeObject<T> {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            entries: BTreeMap::new(),
        }
    }

    pub fn with_entry(mut self, index: usize, value: T) -> Self {
        self.entries.insert(index, value);
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.entries.iter().map(|(&index, value)| (index, value))
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl<T> ArrayLike for ArrayLikeObject<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.length
    }

    fn set_length(&mut self, length: usize) {
        if length < self.length {
            self.entries.split_off(&length);
        }
        self.length = length;
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(&index)
    }

    #[inline]
    fn take(&mut self, index: usize) -> Option<T> {
        self.entries.remove(&index)
    }

    fn put(&mut self, index: usize, slot: Option<T>) {
        match slot {
            Some(value) => {
                self.entries.insert(index, value);
            }
            None => {
                self.entries.remove(&index);
            }
        }
    }
}
