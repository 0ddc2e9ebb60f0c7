/// Ordered, index-addressed container with holes.
///
/// `length` is the number of slots; a slot holding `None` is a hole, which
/// is distinct from any stored value (including `Value::Undefined`).
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence<T> {
    slots: Vec<Option<T>>,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// A sequence of `length` holes.
    pub fn with_length(length: usize) -> Self {
        let mut slots = Vec::with_capacity(length);
        slots.resize_with(length, || None);
        Self { slots }
    }

    pub fn from_slots(slots: Vec<Option<T>>) -> Self {
        Self { slots }
    }

    pub fn of<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }

    /// Builds a sequence from any iterable, passing each item and its index
    /// through `map`.
    pub fn from_iter_mapped<I, U, F>(iter: I, mut map: F) -> Self
    where
        I: IntoIterator<Item = U>,
        F: FnMut(U, usize) -> T,
    {
        iter.into_iter()
            .enumerate()
            .map(|(index, item)| map(item, index))
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut Vec<Option<T>> {
        &mut self.slots
    }

    pub fn into_slots(self) -> Vec<Option<T>> {
        self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.slots.iter().map(Option::as_ref)
    }

    pub fn hole_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    #[inline]
    pub(crate) fn push_slot(&mut self, slot: Option<T>) {
        self.slots.push(slot);
    }
}

impl<T: Clone> Sequence<T> {
    /// The stored values in order, or `None` if any slot is a hole.
    pub fn to_vec(&self) -> Option<Vec<T>> {
        self.slots.iter().cloned().collect()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}
