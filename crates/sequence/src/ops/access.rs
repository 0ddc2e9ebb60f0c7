use crate::array_like::ArrayLike;
use crate::index::{resolve_end, resolve_start};

pub fn at<A: ArrayLike>(source: &A, index: i64) -> Option<&A::Item> {
    let length = source.length();
    let index = if index < 0 {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        length.checked_sub(back)?
    } else {
        usize::try_from(index).ok()?
    };
    if index < length { source.get(index) } else { None }
}

pub fn fill<A>(target: &mut A, value: A::Item, start: Option<i64>, end: Option<i64>) -> &mut A
where
    A: ArrayLike,
    A::Item: Clone,
{
    let length = target.length();
    let start = resolve_start(start, length);
    let end = resolve_end(end, length);
    for index in start..end {
        target.set(index, value.clone());
    }
    target
}

pub fn keys<A: ArrayLike>(source: &A) -> std::ops::Range<usize> {
    0..source.length()
}

pub fn values<A: ArrayLike>(source: &A) -> impl Iterator<Item = Option<&A::Item>> {
    keys(source).map(move |index| source.get(index))
}

pub fn entries<A: ArrayLike>(source: &A) -> impl Iterator<Item = (usize, Option<&A::Item>)> {
    keys(source).map(move |index| (index, source.get(index)))
}
