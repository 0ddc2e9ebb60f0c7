use std::collections::HashSet;

use crate::DEFAULTS;
use crate::array_like::ArrayLike;
use crate::element::Element;
use crate::index::{resolve_end, resolve_start};
use crate::sequence::Sequence;

pub fn slice<A>(source: &A, begin: Option<i64>, end: Option<i64>) -> Sequence<A::Item>
where
    A: ArrayLike,
    A::Item: Clone,
{
    let length = source.length();
    let begin = resolve_start(begin, length);
    let end = resolve_end(end, length);

    let mut out = Sequence::with_capacity(end.saturating_sub(begin));
    for index in begin..end {
        out.push_slot(source.get(index).cloned());
    }
    out
}

pub fn concat<A, I>(source: &A, items: I) -> Sequence<A::Item>
where
    A: ArrayLike,
    A::Item: Element,
    I: IntoIterator<Item = A::Item>,
{
    let mut out = slice(source, None, None);
    for item in items {
        match item.as_sequence() {
            Some(nested) => {
                for slot in nested.iter() {
                    out.push_slot(slot.cloned());
                }
            }
            None => out.push_slot(Some(item)),
        }
    }
    out
}

/// Holes are dropped.
pub fn flat<A>(source: &A, depth: Option<usize>) -> Sequence<A::Item>
where
    A: ArrayLike,
    A::Item: Element,
{
    let mut out = Sequence::new();
    flatten_into(&mut out, source, depth.unwrap_or(DEFAULTS.flat_depth));
    out
}

fn flatten_into<A>(out: &mut Sequence<A::Item>, source: &A, depth: usize)
where
    A: ArrayLike,
    A::Item: Element,
{
    for (_, value) in super::present(source) {
        match value.as_sequence() {
            Some(nested) if depth > 0 => flatten_into(out, nested, depth - 1),
            _ => out.push_slot(Some(value.clone())),
        }
    }
}

/// `1` and `"1"` collide; functions only collide with themselves.
pub fn unique<A>(source: &A) -> Sequence<A::Item>
where
    A: ArrayLike,
    A::Item: Element,
{
    let mut seen = HashSet::new();
    let mut out = Sequence::new();
    for index in 0..source.length() {
        let slot = source.get(index);
        let key = slot.map_or_else(|| "undefined".to_owned(), |value| value.to_key());
        if seen.insert(key) {
            out.push_slot(slot.cloned());
        }
    }
    out
}

pub fn join<A>(source: &A, separator: Option<&str>) -> String
where
    A: ArrayLike,
    A::Item: Element,
{
    let separator = separator.unwrap_or(DEFAULTS.join_separator);
    let mut out = String::new();
    for index in 0..source.length() {
        if index > 0 {
            out.push_str(separator);
        }
        if let Some(value) = source.get(index)
            && !value.is_nullish()
        {
            out.push_str(&value.to_text());
        }
    }
    out
}
