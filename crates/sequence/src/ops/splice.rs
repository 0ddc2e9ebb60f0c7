use crate::array_like::ArrayLike;
use crate::index::{clamp_count, relative_index};
use crate::sequence::Sequence;

use super::move_slot;

/// A missing `delete_count` removes everything from `start` on.
pub fn splice<A, I>(
    target: &mut A,
    start: i64,
    delete_count: Option<i64>,
    items: I,
) -> Sequence<A::Item>
where
    A: ArrayLike,
    I: IntoIterator<Item = A::Item>,
{
    let length = target.length();
    let start = relative_index(start, length);
    let delete_count = clamp_count(delete_count, length - start);
    let items: Vec<A::Item> = items.into_iter().collect();
    let inserted = items.len();

    let mut removed = Sequence::with_capacity(delete_count);
    for index in start..start + delete_count {
        removed.push_slot(target.take(index));
    }

    let tail = start + delete_count;
    if inserted > delete_count {
        let grow = inserted - delete_count;
        target.set_length(length + grow);
        for index in (tail..length).rev() {
            move_slot(target, index, index + grow);
        }
    } else if inserted < delete_count {
        let shrink = delete_count - inserted;
        for index in tail..length {
            move_slot(target, index, index - shrink);
        }
        target.set_length(length - shrink);
    }

    for (offset, item) in items.into_iter().enumerate() {
        target.put(start + offset, Some(item));
    }

    removed
}
