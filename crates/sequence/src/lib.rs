pub mod array_like;
pub mod call;
mod element;
pub mod error;
pub mod index;
pub mod ops;
mod sequence;
mod value;

pub use array_like::{ArrayLike, ArrayLikeObject};
pub use call::{Completion, Method, all_methods, invoke, method_name};
pub use element::Element;
pub use error::{Result, SequenceError};
pub use sequence::Sequence;
pub use value::{Callback, Value};

/// Defaults applied when an optional argument is left out.
#[derive(Clone, Copy, Debug)]
pub struct Defaults {
    pub join_separator: &'static str,
    pub flat_depth: usize,
}

pub const DEFAULTS: Defaults = Defaults {
    join_separator: ",",
    flat_depth: 1,
};
