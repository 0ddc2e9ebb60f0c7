use std::cmp::Ordering;

use crate::array_like::ArrayLike;

use super::move_slot;

/// Not stable. Holes sort last and never reach `compare`.
pub fn sort<A, F>(target: &mut A, mut compare: F) -> &mut A
where
    A: ArrayLike,
    F: FnMut(&A::Item, &A::Item) -> Ordering,
{
    let length = target.length();
    if length > 1 {
        quick_sort(target, 0, length - 1, &mut compare);
    }
    target
}

fn quick_sort<A, F>(target: &mut A, mut low: usize, mut high: usize, compare: &mut F)
where
    A: ArrayLike,
    F: FnMut(&A::Item, &A::Item) -> Ordering,
{
    // Recurse into the smaller side and loop on the larger one.
    while low < high {
        let mid = partition(target, low, high, compare);
        if mid - low < high - mid {
            if mid > low {
                quick_sort(target, low, mid - 1, compare);
            }
            low = mid + 1;
        } else {
            if mid < high {
                quick_sort(target, mid + 1, high, compare);
            }
            high = mid - 1;
        }
    }
}

fn partition<A, F>(target: &mut A, mut low: usize, mut high: usize, compare: &mut F) -> usize
where
    A: ArrayLike,
    F: FnMut(&A::Item, &A::Item) -> Ordering,
{
    let pivot = target.take(low);
    while low < high {
        while low < high && order(target.get(high), pivot.as_ref(), compare) != Ordering::Less {
            high -= 1;
        }
        move_slot(target, high, low);
        while low < high && order(target.get(low), pivot.as_ref(), compare) != Ordering::Greater {
            low += 1;
        }
        move_slot(target, low, high);
    }
    target.put(low, pivot);
    low
}

#[inline]
fn order<T, F>(left: Option<&T>, right: Option<&T>, compare: &mut F) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    match (left, right) {
        (Some(left), Some(right)) => compare(left, right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
