use crate::array_like::ArrayLike;
use crate::sequence::Sequence;

use super::present;

pub fn for_each<A, F>(source: &A, mut f: F)
where
    A: ArrayLike,
    F: FnMut(&A::Item, usize),
{
    for (index, value) in present(source) {
        f(value, index);
    }
}

pub fn every<A, F>(source: &A, mut predicate: F) -> bool
where
    A: ArrayLike,
    F: FnMut(&A::Item, usize) -> bool,
{
    present(source).all(|(index, value)| predicate(value, index))
}

pub fn some<A, F>(source: &A, mut predicate: F) -> bool
where
    A: ArrayLike,
    F: FnMut(&A::Item, usize) -> bool,
{
    present(source).any(|(index, value)| predicate(value, index))
}

pub fn find<A, F>(source: &A, mut predicate: F) -> Option<&A::Item>
where
    A: ArrayLike,
    F: FnMut(&A::Item, usize) -> bool,
{
    present(source)
        .find(|&(index, value)| predicate(value, index))
        .map(|(_, value)| value)
}

pub fn find_index<A, F>(source: &A, mut predicate: F) -> Option<usize>
where
    A: ArrayLike,
    F: FnMut(&A::Item, usize) -> bool,
{
    present(source)
        .find(|&(index, value)| predicate(value, index))
        .map(|(index, _)| index)
}

pub fn filter<A, F>(source: &A, mut predicate: F) -> Sequence<A::Item>
where
    A: ArrayLike,
    A::Item: Clone,
    F: FnMut(&A::Item, usize) -> bool,
{
    present(source)
        .filter(|&(index, value)| predicate(value, index))
        .map(|(_, value)| value.clone())
        .collect()
}

pub fn map<A, U, F>(source: &A, mut f: F) -> Sequence<U>
where
    A: ArrayLike,
    F: FnMut(&A::Item, usize) -> U,
{
    let length = source.length();
    let mut out = Sequence::with_capacity(length);
    for index in 0..length {
        out.push_slot(source.get(index).map(|value| f(value, index)));
    }
    out
}

/// `None` when there is nothing to fold.
pub fn reduce<A, F>(source: &A, mut f: F, initial: Option<A::Item>) -> Option<A::Item>
where
    A: ArrayLike,
    A::Item: Clone,
    F: FnMut(A::Item, &A::Item, usize) -> A::Item,
{
    let mut elements = present(source);
    let mut acc = match initial {
        Some(initial) => initial,
        None => elements.next()?.1.clone(),
    };
    for (index, value) in elements {
        acc = f(acc, value, index);
    }
    Some(acc)
}

pub fn reduce_right<A, F>(source: &A, mut f: F, initial: Option<A::Item>) -> Option<A::Item>
where
    A: ArrayLike,
    A::Item: Clone,
    F: FnMut(A::Item, &A::Item, usize) -> A::Item,
{
    let mut elements = (0..source.length())
        .rev()
        .filter_map(|index| source.get(index).map(|value| (index, value)));
    let mut acc = match initial {
        Some(initial) => initial,
        None => elements.next()?.1.clone(),
    };
    for (index, value) in elements {
        acc = f(acc, value, index);
    }
    Some(acc)
}
