/// Errors raised by the dynamic invocation layer.
///
/// Typed operations in [`crate::ops`] cannot fail; everything except a
/// missing receiver or a non-callable callback is coerced or defaulted.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Array.prototype.{method} called on null or undefined")]
    ReceiverMissing { method: &'static str },

    #[error("{found} is not a function (Array.prototype.{method})")]
    CallbackNotCallable {
        method: &'static str,
        found: &'static str,
    },
}

pub type Result<T, E = SequenceError> = std::result::Result<T, E>;
