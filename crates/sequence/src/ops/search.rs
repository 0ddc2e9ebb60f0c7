use crate::array_like::ArrayLike;
use crate::element::Element;
use crate::index::resolve_start;

/// NaN finds NaN.
pub fn includes<A>(source: &A, needle: &A::Item, from: Option<i64>) -> bool
where
    A: ArrayLike,
    A::Item: Element,
{
    let length = source.length();
    (resolve_start(from, length)..length)
        .any(|index| source.get(index).is_some_and(|value| value.same_value_zero(needle)))
}

pub fn index_of<A>(source: &A, needle: &A::Item, from: Option<i64>) -> Option<usize>
where
    A: ArrayLike,
    A::Item: Element,
{
    let length = source.length();
    (resolve_start(from, length)..length)
        .find(|&index| source.get(index).is_some_and(|value| value.strict_equals(needle)))
}

pub fn last_index_of<A>(source: &A, needle: &A::Item, from: Option<i64>) -> Option<usize>
where
    A: ArrayLike,
    A::Item: Element,
{
    let length = source.length();
    let last = length.checked_sub(1)?;
    let start = match from {
        None => last,
        Some(from) if from < 0 => {
            let back = usize::try_from(from.unsigned_abs()).ok()?;
            length.checked_sub(back)?
        }
        Some(from) => usize::try_from(from).map_or(last, |from| from.min(last)),
    };
    (0..=start)
        .rev()
        .find(|&index| source.get(index).is_some_and(|value| value.strict_equals(needle)))
}
