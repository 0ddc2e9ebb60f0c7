use crate::array_like::ArrayLike;

use super::move_slot;

pub fn push<A, I>(target: &mut A, values: I) -> usize
where
    A: ArrayLike,
    I: IntoIterator<Item = A::Item>,
{
    let mut length = target.length();
    for value in values {
        target.put(length, Some(value));
        length += 1;
    }
    target.set_length(length);
    length
}

pub fn pop<A: ArrayLike>(target: &mut A) -> Option<A::Item> {
    let length = target.length();
    if length == 0 {
        return None;
    }
    let last = target.take(length - 1);
    target.set_length(length - 1);
    last
}

pub fn shift<A: ArrayLike>(target: &mut A) -> Option<A::Item> {
    let length = target.length();
    if length == 0 {
        return None;
    }
    let first = target.take(0);
    for index in 1..length {
        move_slot(target, index, index - 1);
    }
    target.set_length(length - 1);
    first
}

/// An empty receiver is left untouched.
pub fn unshift<A, I>(target: &mut A, values: I) -> usize
where
    A: ArrayLike,
    I: IntoIterator<Item = A::Item>,
{
    let length = target.length();
    if length == 0 {
        return 0;
    }
    let values: Vec<A::Item> = values.into_iter().collect();
    let count = values.len();
    if count == 0 {
        return length;
    }

    target.set_length(length + count);
    // Back to front so no unread slot is overwritten.
    for index in (0..length).rev() {
        move_slot(target, index, index + count);
    }
    for (index, value) in values.into_iter().enumerate() {
        target.put(index, Some(value));
    }
    length + count
}
