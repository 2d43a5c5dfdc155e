//! Value model for parameter encoding.
//!
//! [`Value`] is a closed sum type over the semantic kinds a parameter field can
//! hold. Each kind knows its own zero value ([`Value::is_zero`]) and its own
//! wire string form (`Display`), which keeps the encoding dispatch exhaustive
//! and statically checkable.

use std::borrow::Cow;
use std::fmt;

/// A field value captured for encoding.
///
/// Borrowed where possible: string fields are captured as `&str` slices into
/// the record, so building a `Value` never clones the record's data.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value, encoded unchanged.
    Str(&'a str),
    /// Boolean value, encoded as `true` or `false`.
    Bool(bool),
    /// Signed integer value, encoded as canonical base-10 digits.
    Int(i64),
    /// Unsigned integer value, encoded as canonical base-10 digits.
    UInt(u64),
    /// Floating point value, encoded as the shortest round-trippable decimal.
    Float(f64),
    /// Sequence of values, encoded as its elements joined with `,`.
    Seq(Vec<Value<'a>>),
    /// Optional value: `None` produces no value, `Some` is unwrapped.
    Opt(Option<Box<Value<'a>>>),
    /// Any other type, pre-rendered to text. Never considered zero.
    Other(String),
}

impl Value<'_> {
    /// Capture a value of any [`Display`](fmt::Display) type as [`Value::Other`].
    ///
    /// This is the fallback for types outside the closed kind set: they are
    /// always encoded, using their generic textual representation.
    ///
    /// # Example
    ///
    /// ```
    /// use tankard_core::Value;
    ///
    /// struct BeerId(u64);
    /// impl std::fmt::Display for BeerId {
    ///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    ///         write!(f, "beer-{}", self.0)
    ///     }
    /// }
    ///
    /// let value = Value::other(BeerId(42));
    /// assert_eq!(value.to_string(), "beer-42");
    /// assert!(!value.is_zero());
    /// ```
    #[must_use]
    pub fn other(value: impl fmt::Display) -> Value<'static> {
        Value::Other(value.to_string())
    }

    /// Returns `true` if this value is the zero value for its kind.
    ///
    /// Empty strings and empty sequences are deliberately indistinguishable
    /// here: both count as zero. An absent optional is zero; a present
    /// optional recurses the check onto the wrapped value.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Str(s) => s.is_empty(),
            Self::Bool(b) => !b,
            Self::Int(i) => *i == 0,
            Self::UInt(u) => *u == 0,
            Self::Float(f) => *f == 0.0,
            Self::Seq(items) => items.is_empty(),
            Self::Opt(inner) => inner.as_deref().is_none_or(Value::is_zero),
            Self::Other(_) => false,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(float) => write!(f, "{float}"),
            Self::Seq(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Opt(inner) => match inner {
                Some(value) => write!(f, "{value}"),
                None => Ok(()),
            },
            Self::Other(s) => f.write_str(s),
        }
    }
}

/// Conversion of a field's borrow into a [`Value`].
///
/// Implemented for the ordinary field types (strings, booleans, numbers,
/// optionals, sequences, references). Custom types implement it by hand,
/// usually via [`Value::other`].
pub trait ToValue {
    /// Capture this value for encoding.
    fn to_value(&self) -> Value<'_>;
}

impl ToValue for str {
    fn to_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value<'_> {
        Value::Float(*self)
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value<'_> {
        Value::Float(f64::from(*self))
    }
}

macro_rules! to_value_int {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl ToValue for $ty {
                #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
                fn to_value(&self) -> Value<'_> {
                    Value::$variant(*self as _)
                }
            }
        )+
    };
}

to_value_int!(Int: i8, i16, i32, i64, isize);
to_value_int!(UInt: u8, u16, u32, u64, usize);

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value<'_> {
        Value::Opt(self.as_ref().map(|value| Box::new(value.to_value())))
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value<'_> {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}
