//! Array operations as free functions over any [`ArrayLike`] receiver.

mod access;
mod copy_within;
mod derive;
mod ends;
mod iterate;
mod reverse;
mod search;
mod sort;
mod splice;

pub use access::{at, entries, fill, keys, values};
pub use copy_within::copy_within;
pub use derive::{concat, flat, join, slice, unique};
pub use ends::{pop, push, shift, unshift};
pub use iterate::{every, filter, find, find_index, for_each, map, reduce, reduce_right, some};
pub use reverse::reverse;
pub use search::{includes, index_of, last_index_of};
pub use sort::sort;
pub use splice::splice;

use crate::array_like::ArrayLike;

#[inline]
pub(crate) fn present<A: ArrayLike>(source: &A) -> impl Iterator<Item = (usize, &A::Item)> {
    (0..source.length()).filter_map(move |index| source.get(index).map(|value| (index, value)))
}

/// Moves the slot at `from` to `to`, leaving a hole at `from`.
#[inline]
pub(crate) fn move_slot<A: ArrayLike>(target: &mut A, from: usize, to: usize) {
    let slot = target.take(from);
    target.put(to, slot);
}
