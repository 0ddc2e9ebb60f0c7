//! `Array.prototype.<method>.call(receiver, ...args)` over [`Value`]s.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::DEFAULTS;
use crate::array_like::ArrayLike;
use crate::error::{Result, SequenceError};
use crate::index::integer_from_f64;
use crate::ops;
use crate::value::{Callback, Value};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Method {
    Push,
    Pop,
    Shift,
    Unshift,
    Splice,
    CopyWithin,
    Reverse,
    Sort,
    Fill,
    Slice,
    Concat,
    Flat,
    Unique,
    Join,
    At,
    Every,
    Some,
    Find,
    FindIndex,
    Filter,
    Map,
    ForEach,
    Reduce,
    ReduceRight,
    Includes,
    IndexOf,
    LastIndexOf,
}

pub const ALL_METHODS: [Method; 27] = [
    Method::Push,
    Method::Pop,
    Method::Shift,
    Method::Unshift,
    Method::Splice,
    Method::CopyWithin,
    Method::Reverse,
    Method::Sort,
    Method::Fill,
    Method::Slice,
    Method::Concat,
    Method::Flat,
    Method::Unique,
    Method::Join,
    Method::At,
    Method::Every,
    Method::Some,
    Method::Find,
    Method::FindIndex,
    Method::Filter,
    Method::Map,
    Method::ForEach,
    Method::Reduce,
    Method::ReduceRight,
    Method::Includes,
    Method::IndexOf,
    Method::LastIndexOf,
];

pub fn all_methods() -> &'static [Method] {
    &ALL_METHODS
}

pub fn method_name(method: Method) -> &'static str {
    match method {
        Method::Push => "push",
        Method::Pop => "pop",
        Method::Shift => "shift",
        Method::Unshift => "unshift",
        Method::Splice => "splice",
        Method::CopyWithin => "copyWithin",
        Method::Reverse => "reverse",
        Method::Sort => "sort",
        Method::Fill => "fill",
        Method::Slice => "slice",
        Method::Concat => "concat",
        Method::Flat => "flat",
        Method::Unique => "unique",
        Method::Join => "join",
        Method::At => "at",
        Method::Every => "every",
        Method::Some => "some",
        Method::Find => "find",
        Method::FindIndex => "findIndex",
        Method::Filter => "filter",
        Method::Map => "map",
        Method::ForEach => "forEach",
        Method::Reduce => "reduce",
        Method::ReduceRight => "reduceRight",
        Method::Includes => "includes",
        Method::IndexOf => "indexOf",
        Method::LastIndexOf => "lastIndexOf",
    }
}

impl Method {
    pub fn from_name(name: &str) -> Option<Method> {
        ALL_METHODS
            .iter()
            .copied()
            .find(|&method| method_name(method) == name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    /// The method returned its own receiver.
    Receiver,
    Value(Value),
}

impl Completion {
    pub fn into_value(self) -> Option<Value> {
        match self {
            Completion::Receiver => None,
            Completion::Value(value) => Some(value),
        }
    }
}

pub fn invoke<A>(receiver: Option<&mut A>, method: Method, args: &[Value]) -> Result<Completion>
where
    A: ArrayLike<Item = Value>,
{
    let name = method_name(method);
    let Some(target) = receiver else {
        debug!(method = name, "call without a receiver");
        return Err(SequenceError::ReceiverMissing { method: name });
    };
    trace!(
        method = name,
        length = target.length(),
        argc = args.len(),
        "invoke"
    );

    let completion = match method {
        Method::Push => length(ops::push(target, args.iter().cloned())),
        Method::Pop => or_undefined(ops::pop(target)),
        Method::Shift => or_undefined(ops::shift(target)),
        Method::Unshift => length(ops::unshift(target, args.iter().cloned())),
        Method::Splice => {
            let start = integer_arg(args, 0).unwrap_or(0);
            let removed = ops::splice(
                target,
                start,
                integer_arg(args, 1),
                args.iter().skip(2).cloned(),
            );
            Completion::Value(removed.into())
        }
        Method::CopyWithin => {
            let to = integer_arg(args, 0).unwrap_or(0);
            let start = integer_arg(args, 1).unwrap_or(0);
            ops::copy_within(target, to, start, integer_arg(args, 2));
            Completion::Receiver
        }
        Method::Reverse => {
            ops::reverse(target);
            Completion::Receiver
        }
        Method::Sort => {
            let comparator = optional_callback(name, args, 0)?;
            match comparator {
                Some(comparator) => {
                    ops::sort(target, |a, b| {
                        compare_result(&comparator.call(&[a.clone(), b.clone()]))
                    });
                }
                None => {
                    debug!(method = name, "no comparator, ordering by string form");
                    ops::sort(target, |a, b| {
                        a.to_display_string().cmp(&b.to_display_string())
                    });
                }
            }
            Completion::Receiver
        }
        Method::Fill => {
            let value = args.first().cloned().unwrap_or_default();
            ops::fill(target, value, integer_arg(args, 1), integer_arg(args, 2));
            Completion::Receiver
        }
        Method::Slice => {
            Completion::Value(ops::slice(target, integer_arg(args, 0), integer_arg(args, 1)).into())
        }
        Method::Concat => Completion::Value(ops::concat(target, args.iter().cloned()).into()),
        Method::Flat => {
            let depth = present_arg(args, 0).map(flat_depth);
            Completion::Value(ops::flat(target, depth).into())
        }
        Method::Unique => Completion::Value(ops::unique(target).into()),
        Method::Join => {
            // Only string separators are honoured.
            let separator = match args.first() {
                Some(Value::String(separator)) => separator.as_str(),
                _ => DEFAULTS.join_separator,
            };
            Completion::Value(Value::String(ops::join(target, Some(separator))))
        }
        Method::At => {
            let index = integer_arg(args, 0).unwrap_or(0);
            or_undefined(ops::at(target, index).cloned())
        }
        Method::Every => {
            let predicate = callback(name, args, 0)?;
            Completion::Value(ops::every(target, |value, index| test(predicate, value, index)).into())
        }
        Method::Some => {
            let predicate = callback(name, args, 0)?;
            Completion::Value(ops::some(target, |value, index| test(predicate, value, index)).into())
        }
        Method::Find => {
            let predicate = callback(name, args, 0)?;
            or_undefined(ops::find(target, |value, index| test(predicate, value, index)).cloned())
        }
        Method::FindIndex => {
            let predicate = callback(name, args, 0)?;
            position(ops::find_index(target, |value, index| {
                test(predicate, value, index)
            }))
        }
        Method::Filter => {
            let predicate = callback(name, args, 0)?;
            Completion::Value(
                ops::filter(target, |value, index| test(predicate, value, index)).into(),
            )
        }
        Method::Map => {
            let f = callback(name, args, 0)?;
            Completion::Value(
                ops::map(target, |value, index| {
                    f.call(&[value.clone(), Value::from(index)])
                })
                .into(),
            )
        }
        Method::ForEach => {
            let f = callback(name, args, 0)?;
            ops::for_each(target, |value, index| {
                f.call(&[value.clone(), Value::from(index)]);
            });
            Completion::Value(Value::Undefined)
        }
        Method::Reduce => {
            let f = callback(name, args, 0)?;
            or_undefined(ops::reduce(
                target,
                |acc, value, index| f.call(&[acc, value.clone(), Value::from(index)]),
                args.get(1).cloned(),
            ))
        }
        Method::ReduceRight => {
            let f = callback(name, args, 0)?;
            or_undefined(ops::reduce_right(
                target,
                |acc, value, index| f.call(&[acc, value.clone(), Value::from(index)]),
                args.get(1).cloned(),
            ))
        }
        Method::Includes => {
            let needle = args.first().cloned().unwrap_or_default();
            Completion::Value(ops::includes(target, &needle, integer_arg(args, 1)).into())
        }
        Method::IndexOf => {
            let needle = args.first().cloned().unwrap_or_default();
            position(ops::index_of(target, &needle, integer_arg(args, 1)))
        }
        Method::LastIndexOf => {
            let needle = args.first().cloned().unwrap_or_default();
            position(ops::last_index_of(target, &needle, integer_arg(args, 1)))
        }
    };
    Ok(completion)
}

#[inline]
fn present_arg(args: &[Value], index: usize) -> Option<&Value> {
    args.get(index).filter(|value| !matches!(value, Value::Undefined))
}

/// Offsets are taken from numbers only; any other present value means 0.
#[inline]
fn integer_arg(args: &[Value], index: usize) -> Option<i64> {
    present_arg(args, index).map(|value| match value {
        Value::Number(n) => integer_from_f64(*n),
        _ => 0,
    })
}

fn flat_depth(value: &Value) -> usize {
    let depth = value.to_number();
    if depth.is_nan() || depth <= 0.0 {
        0
    } else if depth.is_infinite() {
        usize::MAX
    } else {
        depth as usize
    }
}

fn callback<'a>(method: &'static str, args: &'a [Value], index: usize) -> Result<&'a Callback> {
    match args.get(index) {
        Some(Value::Function(callback)) => Ok(callback),
        other => Err(not_callable(method, other)),
    }
}

fn optional_callback<'a>(
    method: &'static str,
    args: &'a [Value],
    index: usize,
) -> Result<Option<&'a Callback>> {
    match present_arg(args, index) {
        None => Ok(None),
        Some(Value::Function(callback)) => Ok(Some(callback)),
        other => Err(not_callable(method, other)),
    }
}

fn not_callable(method: &'static str, found: Option<&Value>) -> SequenceError {
    let found = found.map_or("undefined", Value::type_of);
    debug!(method, found, "callback is not callable");
    SequenceError::CallbackNotCallable { method, found }
}

#[inline]
fn test(predicate: &Callback, value: &Value, index: usize) -> bool {
    predicate
        .call(&[value.clone(), Value::from(index)])
        .to_boolean()
}

/// Maps a comparator's signed result to an ordering; NaN counts as equal.
fn compare_result(result: &Value) -> Ordering {
    let n = result.to_number();
    if n < 0.0 {
        Ordering::Less
    } else if n > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[inline]
fn length(length: usize) -> Completion {
    Completion::Value(Value::from(length))
}

#[inline]
fn or_undefined(value: Option<Value>) -> Completion {
    Completion::Value(value.unwrap_or_default())
}

#[inline]
fn position(index: Option<usize>) -> Completion {
    Completion::Value(index.map_or(Value::Number(-1.0), Value::from))
}
