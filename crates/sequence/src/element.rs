use crate::sequence::Sequence;
use crate::value::{Value, number_to_string};

/// What the derivations need to know about an element.
pub trait Element: Clone {
    /// Key that `unique` deduplicates on.
    fn to_key(&self) -> String;

    /// String form printed by `join`.
    fn to_text(&self) -> String {
        self.to_key()
    }

    fn is_nullish(&self) -> bool {
        false
    }

    fn strict_equals(&self, other: &Self) -> bool;

    fn same_value_zero(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }

    /// `Some` when the element is itself a sequence that `concat` and
    /// `flat` may spread.
    fn as_sequence(&self) -> Option<&Sequence<Self>> {
        None
    }
}

impl Element for Value {
    /// Functions key by identity.
    fn to_key(&self) -> String {
        match self {
            Value::Function(callback) => format!("[Function@{:x}]", callback.identity()),
            _ => self.to_display_string(),
        }
    }

    #[inline]
    fn to_text(&self) -> String {
        self.to_display_string()
    }

    #[inline]
    fn is_nullish(&self) -> bool {
        Value::is_nullish(self)
    }

    #[inline]
    fn strict_equals(&self, other: &Self) -> bool {
        Value::strict_equals(self, other)
    }

    #[inline]
    fn same_value_zero(&self, other: &Self) -> bool {
        Value::same_value_zero(self, other)
    }

    fn as_sequence(&self) -> Option<&Sequence<Self>> {
        match self {
            Value::Array(sequence) => Some(sequence.as_ref()),
            _ => None,
        }
    }
}

macro_rules! impl_element_by_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                #[inline]
                fn to_key(&self) -> String {
                    self.to_string()
                }

                #[inline]
                fn strict_equals(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_element_by_eq!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool, char, String);

impl Element for &str {
    #[inline]
    fn to_key(&self) -> String {
        (*self).to_owned()
    }

    #[inline]
    fn strict_equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Element for f64 {
    #[inline]
    fn to_key(&self) -> String {
        number_to_string(*self)
    }

    #[inline]
    fn strict_equals(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn same_value_zero(&self, other: &Self) -> bool {
        self == other || (self.is_nan() && other.is_nan())
    }
}
