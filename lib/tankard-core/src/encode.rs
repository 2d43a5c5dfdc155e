//! Encoding entry points.
//!
//! [`encode`] is the typed path: it walks a record's static field table and is
//! infallible. [`encode_json`] is the dynamic path for values whose shape is
//! only known at runtime; it rejects anything that is not a record.

use bytes::Bytes;

use crate::{Error, ParamSet, Record, Result, Value};

/// Encode a record into its parameter set.
///
/// Fields are visited in declaration order. A field is skipped if and only if
/// it is an absent optional (there is no value to render), or it carries the
/// omit-empty flag and holds its kind's zero value. Every other field is
/// rendered to its wire string form; on duplicate external keys the last
/// write wins. The record itself is never mutated.
///
/// # Example
///
/// ```
/// use tankard_core::{Field, Record, ToValue, Value, encode};
///
/// struct BeerQuery {
///     name: String,
///     page: u32,
/// }
///
/// impl Record for BeerQuery {
///     const FIELDS: &'static [Field<Self>] = &[
///         Field::new("name", true, {
///             fn get(record: &BeerQuery) -> Value<'_> {
///                 record.name.to_value()
///             }
///             get
///         }),
///         Field::new("p", false, {
///             fn get(record: &BeerQuery) -> Value<'_> {
///                 record.page.to_value()
///             }
///             get
///         }),
///     ];
/// }
///
/// let query = BeerQuery {
///     name: String::new(),
///     page: 1,
/// };
/// let params = encode(&query);
/// assert_eq!(params.get("name"), None);
/// assert_eq!(params.get("p"), Some("1"));
/// ```
pub fn encode<T: Record>(record: &T) -> ParamSet {
    let mut params = ParamSet::new();
    for field in T::FIELDS {
        let value = (field.get)(record);
        // Unwrap one level of optional: absent means no value at all.
        let value = match value {
            Value::Opt(None) => continue,
            Value::Opt(Some(inner)) => *inner,
            other => other,
        };
        if field.omit_empty && value.is_zero() {
            continue;
        }
        params.set(field.key, value.to_string());
    }
    params
}

/// Encode a record straight to a percent-encoded query string.
///
/// # Errors
///
/// Returns an error if form serialization fails.
pub fn to_query_string<T: Record>(record: &T) -> Result<String> {
    encode(record).to_query_string()
}

/// Encode a record straight to `application/x-www-form-urlencoded` body bytes.
///
/// # Errors
///
/// Returns an error if form serialization fails.
pub fn to_form<T: Record>(record: &T) -> Result<Bytes> {
    encode(record).to_form_body()
}

/// Encode a dynamically shaped record held as a JSON value.
///
/// The value must be a JSON object; any other shape fails with
/// [`Error::InvalidInput`]. Object entries follow the same rules as the typed
/// path: `null` entries are absent optionals and produce no parameter,
/// scalars render to their wire string forms, arrays of scalars join with
/// `,`. Nested objects and mixed arrays are not flattened into multiple keys;
/// they render as compact JSON text under their single key.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `value` is not a JSON object.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tankard_core::encode_json;
///
/// let params = encode_json(&json!({
///     "name": "Punk IPA",
///     "abv": 5.6,
///     "ids": [1, 2, 3],
///     "brewery": null,
/// }))
/// .expect("object input");
///
/// assert_eq!(params.get("name"), Some("Punk IPA"));
/// assert_eq!(params.get("abv"), Some("5.6"));
/// assert_eq!(params.get("ids"), Some("1,2,3"));
/// assert_eq!(params.get("brewery"), None);
///
/// assert!(encode_json(&json!([1, 2, 3])).is_err());
/// ```
pub fn encode_json(value: &serde_json::Value) -> Result<ParamSet> {
    let serde_json::Value::Object(entries) = value else {
        return Err(Error::invalid_input(json_kind(value)));
    };

    let mut params = ParamSet::new();
    for (key, entry) in entries {
        if let Some(text) = json_text(entry) {
            params.set(key.clone(), text);
        }
    }
    Ok(params)
}

/// Render one object entry to its wire string form.
///
/// Returns `None` for `null` (an absent optional produces no value).
fn json_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(number_text(n)),
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let scalars: Option<Vec<String>> = items.iter().map(scalar_text).collect();
            match scalars {
                Some(parts) => Some(parts.join(",")),
                // Mixed or nested arrays fall back to compact JSON text.
                None => Some(value.to_string()),
            }
        }
        serde_json::Value::Object(_) => Some(value.to_string()),
    }
}

/// String form of a scalar array element; `None` for non-scalars.
fn scalar_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(number_text(n)),
        serde_json::Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Canonical string form of a JSON number.
///
/// Floats go through `f64` display so `8.0` renders as `8`, matching the
/// typed path's shortest round-trippable form.
fn number_text(number: &serde_json::Number) -> String {
    if let Some(i) = number.as_i64() {
        i.to_string()
    } else if let Some(u) = number.as_u64() {
        u.to_string()
    } else if let Some(f) = number.as_f64() {
        f.to_string()
    } else {
        number.to_string()
    }
}

/// Human-readable kind name for invalid-input errors.
fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{Field, ToValue};

    struct BeerQuery {
        name: String,
        abv: String,
        page: u32,
    }

    impl Record for BeerQuery {
        const FIELDS: &'static [Field<Self>] = &[
            Field::new("name", true, {
                fn get(record: &BeerQuery) -> Value<'_> {
                    record.name.to_value()
                }
                get
            }),
            Field::new("abv", true, {
                fn get(record: &BeerQuery) -> Value<'_> {
                    record.abv.to_value()
                }
                get
            }),
            Field::new("p", false, {
                fn get(record: &BeerQuery) -> Value<'_> {
                    record.page.to_value()
                }
                get
            }),
        ];
    }

    #[test]
    fn omit_empty_drops_zero_values_only() {
        let query = BeerQuery {
            name: String::new(),
            abv: "8".to_string(),
            page: 1,
        };
        let params = encode(&query);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("abv"), Some("8"));
        assert_eq!(params.get("p"), Some("1"));
        assert!(!params.contains_key("name"));
    }

    #[test]
    fn field_without_omit_encodes_zero_value() {
        let query = BeerQuery {
            name: "ale".to_string(),
            abv: "5.7".to_string(),
            page: 0,
        };
        let params = encode(&query);

        // "p" carries no omit flag, so numeric zero is still encoded
        assert_eq!(params.get("p"), Some("0"));
        assert_eq!(params.get("name"), Some("ale"));
        assert_eq!(params.get("abv"), Some("5.7"));
    }

    #[test]
    fn encoding_is_idempotent() {
        let query = BeerQuery {
            name: "ale".to_string(),
            abv: String::new(),
            page: 3,
        };
        assert_eq!(encode(&query), encode(&query));
    }

    struct PagedQuery {
        ibu: Option<u32>,
    }

    impl Record for PagedQuery {
        const FIELDS: &'static [Field<Self>] = &[Field::new("ibu", true, {
            fn get(record: &PagedQuery) -> Value<'_> {
                record.ibu.to_value()
            }
            get
        })];
    }

    #[test]
    fn optional_field_unwraps_before_zero_check() {
        // Unset: no value at all
        let params = encode(&PagedQuery { ibu: None });
        assert!(!params.contains_key("ibu"));

        // Set to zero: still omitted under omit-empty, zero after unwrap
        let params = encode(&PagedQuery { ibu: Some(0) });
        assert!(!params.contains_key("ibu"));

        // Set to a non-zero value: encoded
        let params = encode(&PagedQuery { ibu: Some(5) });
        assert_eq!(params.get("ibu"), Some("5"));
    }

    struct DuplicateKeys {
        first: u32,
        second: u32,
    }

    impl Record for DuplicateKeys {
        const FIELDS: &'static [Field<Self>] = &[
            Field::new("p", false, {
                fn get(record: &DuplicateKeys) -> Value<'_> {
                    record.first.to_value()
                }
                get
            }),
            Field::new("p", false, {
                fn get(record: &DuplicateKeys) -> Value<'_> {
                    record.second.to_value()
                }
                get
            }),
        ];
    }

    #[test]
    fn duplicate_keys_last_write_wins() {
        let params = encode(&DuplicateKeys {
            first: 1,
            second: 2,
        });
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("p"), Some("2"));
    }

    struct TaggedQuery {
        styles: Vec<String>,
    }

    impl Record for TaggedQuery {
        const FIELDS: &'static [Field<Self>] = &[Field::new("styles", true, {
            fn get(record: &TaggedQuery) -> Value<'_> {
                record.styles.to_value()
            }
            get
        })];
    }

    #[test]
    fn sequence_joins_with_comma_and_omits_when_empty() {
        let params = encode(&TaggedQuery {
            styles: vec!["ale".to_string(), "lager".to_string()],
        });
        assert_eq!(params.get("styles"), Some("ale,lager"));

        // Empty sequence counts as zero under omit-empty
        let params = encode(&TaggedQuery { styles: vec![] });
        assert!(!params.contains_key("styles"));
    }

    #[test]
    fn to_query_string_helper() {
        let query = BeerQuery {
            name: String::new(),
            abv: "8".to_string(),
            page: 1,
        };
        assert_eq!(to_query_string(&query).expect("serialize"), "abv=8&p=1");
    }

    #[test]
    fn to_form_helper() {
        let query = BeerQuery {
            name: "pale ale".to_string(),
            abv: String::new(),
            page: 2,
        };
        let body = to_form(&query).expect("serialize");
        assert_eq!(body.as_ref(), b"name=pale+ale&p=2");
    }

    #[test]
    fn encode_json_object() {
        let params = encode_json(&json!({
            "name": "Punk IPA",
            "organic": true,
            "abv": 5.6,
            "year": 2007,
            "ids": [1, 2, 3],
            "brewery": null,
        }))
        .expect("object input");

        assert_eq!(params.get("name"), Some("Punk IPA"));
        assert_eq!(params.get("organic"), Some("true"));
        assert_eq!(params.get("abv"), Some("5.6"));
        assert_eq!(params.get("year"), Some("2007"));
        assert_eq!(params.get("ids"), Some("1,2,3"));
        assert!(!params.contains_key("brewery"));
    }

    #[test]
    fn encode_json_whole_float_renders_short() {
        let params = encode_json(&json!({ "abv": 8.0 })).expect("object input");
        assert_eq!(params.get("abv"), Some("8"));
    }

    #[test]
    fn encode_json_rejects_non_records() {
        for (value, kind) in [
            (json!(null), "null"),
            (json!(true), "boolean"),
            (json!(42), "number"),
            (json!("ale"), "string"),
            (json!([1, 2]), "array"),
        ] {
            let err = encode_json(&value).expect_err("non-object input");
            assert!(err.is_invalid_input());
            assert!(
                err.to_string().contains(kind),
                "expected kind {kind} in: {err}"
            );
        }
    }

    #[test]
    fn encode_json_nested_stays_flat() {
        let params = encode_json(&json!({
            "brewery": { "name": "BrewDog", "established": 2007 },
            "mixed": [1, [2]],
        }))
        .expect("object input");

        // Nested composites render as compact JSON text under one key
        assert_eq!(
            params.get("brewery"),
            Some(r#"{"established":2007,"name":"BrewDog"}"#)
        );
        assert_eq!(params.get("mixed"), Some("[1,[2]]"));
    }
}
