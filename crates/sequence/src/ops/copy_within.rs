use crate::array_like::ArrayLike;
use crate::index::{relative_index, resolve_end};

/// A hole at the source deletes the destination.
pub fn copy_within<A>(target: &mut A, to: i64, start: i64, end: Option<i64>) -> &mut A
where
    A: ArrayLike,
    A::Item: Clone,
{
    let length = target.length();
    let to = relative_index(to, length);
    let from = relative_index(start, length);
    let end = resolve_end(end, length);
    let count = end.saturating_sub(from).min(length - to);
    if count == 0 {
        return target;
    }

    if from < to && to < from + count {
        for step in (0..count).rev() {
            copy_slot(target, from + step, to + step);
        }
    } else {
        for step in 0..count {
            copy_slot(target, from + step, to + step);
        }
    }
    target
}

#[inline]
fn copy_slot<A>(target: &mut A, from: usize, to: usize)
where
    A: ArrayLike,
    A::Item: Clone,
{
    let slot = target.get(from).cloned();
    target.put(to, slot);
}
