//! Static field descriptors.
//!
//! A record type describes itself through a table of [`Field`] descriptors,
//! built once at compile time (usually by `#[derive(Params)]`). The encoder
//! walks the table in declaration order; there is no runtime reflection.

use std::fmt;

use crate::Value;

/// Descriptor for one encodable field of a record type `T`.
pub struct Field<T> {
    /// External key used in the encoded output.
    pub key: &'static str,
    /// Skip this field when its value is the zero value for its kind.
    pub omit_empty: bool,
    /// Accessor capturing the field's current value from a record.
    pub get: for<'a> fn(&'a T) -> Value<'a>,
}

impl<T> Field<T> {
    /// Create a field descriptor.
    #[must_use]
    pub const fn new(
        key: &'static str,
        omit_empty: bool,
        get: for<'a> fn(&'a T) -> Value<'a>,
    ) -> Self {
        Self {
            key,
            omit_empty,
            get,
        }
    }
}

// Manual impls: the derived ones would put unnecessary bounds on `T`,
// which never appears by value in the descriptor.
impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("key", &self.key)
            .field("omit_empty", &self.omit_empty)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Beer {
        name: String,
    }

    #[test]
    fn field_descriptor_access() {
        let field: Field<Beer> = Field::new("name", true, {
            fn get(record: &Beer) -> Value<'_> {
                Value::Str(&record.name)
            }
            get
        });

        let beer = Beer {
            name: "Ale".to_string(),
        };
        assert_eq!(field.key, "name");
        assert!(field.omit_empty);
        assert_eq!((field.get)(&beer), Value::Str("Ale"));
    }

    #[test]
    fn field_debug_output() {
        let field: Field<Beer> = Field::new("name", false, {
            fn get(record: &Beer) -> Value<'_> {
                Value::Str(&record.name)
            }
            get
        });
        let debug = format!("{field:?}");
        assert!(debug.contains("name"), "unexpected debug: {debug}");
    }
}
